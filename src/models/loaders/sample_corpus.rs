//! 示例题库
//!
//! 题库文件不存在时写入一份示例，方便第一次运行

use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 示例题库内容
pub const SAMPLE_CORPUS: &[&str] = &[
    "# Format: question|A|B|C|D|CORRECT_OPTION|SECONDS",
    "# Example: What is 2+2?|2|3|4|5|C|15",
    "What is 2+2?|2|3|4|5|C|15",
    "Which keyword declares an immutable binding in Rust?|var|let|const mut|static mut|B|20",
    "Which collection does NOT allow duplicates?|Vec|VecDeque|HashSet|LinkedList|C|20",
    "Which is NOT a Rust primitive type?|i32|String|f64|bool|B|15",
    "Which module has the HashMap type?|std::io|std::collections|std::fmt|std::time|B|15",
    "Which function starts a Rust binary?|start()|main()|run()|init()|B|10",
    "Which trait enables the ? operator on errors via conversion?|Clone|Debug|From|Default|C|15",
    "Default value of u32::default()?|0|1|None|undefined|A|15",
    "Which trait marks types safe to send across threads?|Send|Copy|Sized|Ord|A|15",
    "Which collection pops from the back like a stack?|BinaryHeap|Vec used as stack|HashMap|BTreeSet|B|15",
];

/// 题库文件不存在时写入示例题库
///
/// # 返回
/// 返回是否新建了文件
pub async fn ensure_sample_corpus(path: &Path) -> Result<bool> {
    if fs::try_exists(path).await.unwrap_or(false) {
        return Ok(false);
    }

    let mut content = SAMPLE_CORPUS.join("\n");
    content.push('\n');
    fs::write(path, content)
        .await
        .with_context(|| format!("无法写入示例题库: {}", path.display()))?;

    info!("已生成示例题库: {}", path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorpusPolicy;
    use crate::models::loaders::parse_corpus;

    #[test]
    fn sample_corpus_is_fully_valid() {
        let report = parse_corpus(SAMPLE_CORPUS.iter(), &CorpusPolicy::default());
        assert_eq!(report.questions.len(), 10);
        assert!(report.skipped.is_empty());
        assert_eq!(report.ignored, 2);
    }

    #[tokio::test]
    async fn writes_only_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");

        assert!(ensure_sample_corpus(&path).await.unwrap());
        std::fs::write(&path, "custom|a|b|c|d|A|5\n").unwrap();
        assert!(!ensure_sample_corpus(&path).await.unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "custom|a|b|c|d|A|5\n"
        );
    }
}

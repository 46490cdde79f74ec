use crate::config::CorpusPolicy;
use crate::error::{AppError, AppResult};
use crate::models::question::{Letter, Question};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// 被跳过的记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 行号（从 1 开始）
    pub line_no: usize,
    /// 原始内容（已去除首尾空白）
    pub content: String,
    /// 跳过原因
    pub reason: String,
}

/// 题库加载结果
#[derive(Debug, Default, Clone)]
pub struct LoadReport {
    /// 有效题目，保持文件中的顺序
    pub questions: Vec<Question>,
    /// 格式错误被跳过的记录
    pub skipped: Vec<SkippedRecord>,
    /// 空行和注释行数量
    pub ignored: usize,
}

/// 解析题库记录
///
/// 单条记录出错只会被跳过并记录下来，不会中断整个加载过程
pub fn parse_corpus<I, S>(lines: I, policy: &CorpusPolicy) -> LoadReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = LoadReport::default();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_no = index + 1;
        let line = raw.as_ref().trim();

        let is_comment =
            !policy.comment_prefix.is_empty() && line.starts_with(policy.comment_prefix.as_str());
        if line.is_empty() || is_comment {
            report.ignored += 1;
            continue;
        }

        match parse_record(line, policy) {
            Ok(question) => report.questions.push(question),
            Err(reason) => {
                warn!("跳过格式错误的第 {} 行: {}", line_no, line);
                report.skipped.push(SkippedRecord {
                    line_no,
                    content: line.to_string(),
                    reason,
                });
            }
        }
    }

    report
}

/// 解析单条记录: `题目|A|B|C|D|正确选项|秒数`
///
/// 多余的字段会被忽略；末尾的空字段不计数（`Q|a|b|c|d|A|` 只有 6 个字段）
pub fn parse_record(line: &str, policy: &CorpusPolicy) -> Result<Question, String> {
    let mut parts: Vec<&str> = line.split('|').collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    let parts: Vec<&str> = parts.into_iter().map(str::trim).collect();
    if parts.len() < policy.min_fields.max(7) {
        return Err(format!(
            "字段数量不足: 需要 {} 个，实际 {} 个",
            policy.min_fields.max(7),
            parts.len()
        ));
    }

    let options = [
        parts[1].to_string(),
        parts[2].to_string(),
        parts[3].to_string(),
        parts[4].to_string(),
    ];

    let correct = Letter::parse_first(parts[5]).unwrap_or_else(|| {
        debug!(
            "正确选项 '{}' 无法识别，使用默认值 {}",
            parts[5], policy.default_correct
        );
        policy.default_correct
    });

    let seconds = match parts[6].parse::<i64>() {
        Ok(secs) if secs > 0 => u32::try_from(secs).unwrap_or(u32::MAX),
        _ => {
            debug!(
                "时限 '{}' 无法识别，使用默认值 {} 秒",
                parts[6], policy.default_seconds
            );
            policy.default_seconds
        }
    };

    Ok(Question::new(parts[0], options, correct, seconds))
}

/// 从文件加载题库
///
/// 只有文件本身无法读取时才返回错误
pub async fn load_corpus_file(path: &Path, policy: &CorpusPolicy) -> AppResult<LoadReport> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::corpus_unavailable(path.display().to_string(), e))?;

    let report = parse_corpus(content.lines(), policy);
    info!(
        "题库 {} 加载完成: 有效 {} 道, 跳过 {} 行",
        path.display(),
        report.questions.len(),
        report.skipped.len()
    );

    Ok(report)
}

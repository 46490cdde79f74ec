//! 结果记录服务 - 业务能力层
//!
//! 只负责"把一次测验结果追加到结果文件"能力，写入失败不影响测验本身

use crate::error::{AppError, AppResult};
use crate::models::result::QuizResult;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// 只追加的结果输出
pub trait ResultSink {
    /// 追加一行
    fn append_line(&mut self, line: &str) -> AppResult<()>;

    /// 用于提示信息的目标描述
    fn describe(&self) -> String;
}

/// 写入文件（不存在则创建）
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSink for FileSink {
    fn append_line(&mut self, line: &str) -> AppResult<()> {
        let path = self.path.display().to_string();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::sink_write_failed(&path, e))?;

        writeln!(file, "{}", line).map_err(|e| AppError::sink_write_failed(&path, e))?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// 内存中的结果输出
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl ResultSink for MemorySink {
    fn append_line(&mut self, line: &str) -> AppResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// 结果记录服务
pub struct ResultRecorder<S: ResultSink> {
    sink: S,
}

impl<S: ResultSink> ResultRecorder<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 记录一次测验结果
    ///
    /// # 返回
    /// 返回是否成功写入；失败时只输出警告
    pub fn record(&mut self, result: &QuizResult) -> bool {
        let line = result.as_line();
        debug!("写入结果: {}", line);

        match self.sink.append_line(&line) {
            Ok(()) => true,
            Err(e) => {
                warn!("⚠️ 无法写入结果文件 {}: {}", self.sink.describe(), e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use chrono::NaiveDate;

    struct BrokenSink;

    impl ResultSink for BrokenSink {
        fn append_line(&mut self, _line: &str) -> AppResult<()> {
            Err(AppError::Sink(SinkError::WriteFailed {
                path: "broken".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            }))
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn result() -> QuizResult {
        let when = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        QuizResult::at(when, "Ada", 2, 1, 4)
    }

    #[test]
    fn records_formatted_line() {
        let mut recorder = ResultRecorder::new(MemorySink::default());
        assert!(recorder.record(&result()));
        assert_eq!(
            recorder.sink().lines,
            vec!["2024-01-02 03:04:05|Ada|attempted=2|correct=1|total=4|percent=25.00"]
        );
    }

    #[test]
    fn write_failure_is_not_fatal() {
        let mut recorder = ResultRecorder::new(BrokenSink);
        let result = result();
        assert!(!recorder.record(&result));
        assert_eq!(result.correct, 1);
    }

    #[test]
    fn file_sink_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");
        let mut recorder = ResultRecorder::new(FileSink::new(&path));

        assert!(recorder.record(&result()));
        assert!(recorder.record(&result()));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with("percent=25.00\n"));
    }

    #[test]
    fn file_sink_in_missing_directory_fails_softly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("results.txt");
        let mut recorder = ResultRecorder::new(FileSink::new(path));
        assert!(!recorder.record(&result()));
    }
}

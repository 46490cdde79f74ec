use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库相关错误
    #[error("题库错误: {0}")]
    Corpus(#[from] CorpusError),
    /// 输入读取错误
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 结果写入错误
    #[error("结果写入错误: {0}")]
    Sink(#[from] SinkError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 题库错误
///
/// 只有这一类错误会让一次测验无法开始
#[derive(Debug, Error)]
pub enum CorpusError {
    /// 题库文件无法读取
    #[error("无法读取题库 ({path}): {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 题库中没有任何有效题目
    #[error("题库中没有有效题目: {path}")]
    Empty { path: String },
}

/// 输入读取错误
#[derive(Debug, Error)]
pub enum InputError {
    /// 输入流已关闭（EOF）
    #[error("输入流已关闭")]
    StreamClosed,
    /// 读取失败
    #[error("读取输入失败: {source}")]
    ReadFailed {
        #[source]
        source: std::io::Error,
    },
    /// 读取线程异常退出，没有返回结果
    #[error("读取线程异常退出")]
    WorkerLost,
}

/// 结果写入错误
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("写入结果失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置文件读取失败
    #[error("配置文件读取失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建题库不可用错误
    pub fn corpus_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Corpus(CorpusError::Unavailable {
            path: path.into(),
            source,
        })
    }

    /// 创建结果写入失败错误
    pub fn sink_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Sink(SinkError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_unavailable_keeps_path_and_source() {
        let err = AppError::corpus_unavailable(
            "questions.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let message = err.to_string();
        assert!(message.contains("questions.txt"));
        assert!(message.contains("missing"));
        assert!(matches!(err, AppError::Corpus(CorpusError::Unavailable { .. })));
    }

    #[test]
    fn input_errors_convert_into_app_error() {
        let err: AppError = InputError::StreamClosed.into();
        assert!(matches!(err, AppError::Input(InputError::StreamClosed)));
    }
}

use crate::error::{AppResult, ConfigError};
use crate::models::question::Letter;
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "quiz.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库文件
    pub questions_file: String,
    /// 结果文件（只追加）
    pub results_file: String,
    /// 每次最多出题数量
    pub max_questions: usize,
    /// 玩家名称，未设置时在启动时询问
    pub player: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 题库文件不存在时是否生成示例题库
    pub provision_sample: bool,
    /// 题库解析策略
    pub corpus: CorpusPolicy,
}

/// 题库解析策略
///
/// 记录格式: `题目|A|B|C|D|正确选项|秒数`。
/// 正确选项和秒数无法识别时不会丢弃该记录，而是替换为这里的默认值。
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CorpusPolicy {
    /// 正确选项为空或不在 A-D 范围内时使用的选项
    pub default_correct: Letter,
    /// 秒数无法解析（或不是正数）时使用的时限
    pub default_seconds: u32,
    /// 注释行前缀
    pub comment_prefix: String,
    /// 一条有效记录至少需要的字段数
    pub min_fields: usize,
}

impl Default for CorpusPolicy {
    fn default() -> Self {
        Self {
            default_correct: Letter::A,
            default_seconds: 20,
            comment_prefix: "#".to_string(),
            min_fields: 7,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "questions.txt".to_string(),
            results_file: "results.txt".to_string(),
            max_questions: 10,
            player: None,
            verbose_logging: false,
            provision_sample: true,
            corpus: CorpusPolicy::default(),
        }
    }
}

impl Config {
    /// 只从环境变量加载（在默认值基础上覆盖）
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 加载配置文件（`QUIZ_CONFIG` 或 `quiz.toml`，不存在则跳过），再用环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        if Path::new(&path).exists() {
            Ok(Self::from_toml_file(&path)?.with_env_overrides())
        } else {
            Ok(Self::from_env())
        }
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| {
            ConfigError::ParseFailed {
                path: path.to_string(),
                source,
            }
            .into()
        })
    }

    /// 解析 TOML 内容，缺失的字段使用默认值
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn with_env_overrides(self) -> Self {
        let default = self;
        Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            results_file: std::env::var("RESULTS_FILE").unwrap_or(default.results_file),
            max_questions: std::env::var("MAX_QUESTIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_questions),
            player: std::env::var("QUIZ_PLAYER").ok().or(default.player),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            provision_sample: std::env::var("PROVISION_SAMPLE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.provision_sample),
            corpus: CorpusPolicy {
                default_correct: std::env::var("DEFAULT_CORRECT").ok().and_then(|v| Letter::parse_first(&v)).unwrap_or(default.corpus.default_correct),
                default_seconds: std::env::var("DEFAULT_SECONDS").ok().and_then(|v| v.parse().ok()).filter(|s| *s > 0).unwrap_or(default.corpus.default_seconds),
                ..default.corpus
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_quiz() {
        let config = Config::default();
        assert_eq!(config.questions_file, "questions.txt");
        assert_eq!(config.results_file, "results.txt");
        assert_eq!(config.max_questions, 10);
        assert_eq!(config.corpus.default_correct, Letter::A);
        assert_eq!(config.corpus.default_seconds, 20);
        assert_eq!(config.corpus.min_fields, 7);
    }

    #[test]
    fn toml_overlay_keeps_missing_fields_at_default() {
        let config = Config::from_toml_str(
            r#"
            max_questions = 3
            player = "Ada"

            [corpus]
            default_seconds = 30
            default_correct = "B"
            "#,
        )
        .unwrap();

        assert_eq!(config.max_questions, 3);
        assert_eq!(config.player.as_deref(), Some("Ada"));
        assert_eq!(config.questions_file, "questions.txt");
        assert_eq!(config.corpus.default_seconds, 30);
        assert_eq!(config.corpus.default_correct, Letter::B);
        assert_eq!(config.corpus.comment_prefix, "#");
    }

    #[test]
    fn load_without_config_file_falls_back_to_env() {
        std::env::set_var("QUIZ_CONFIG", "definitely_missing_quiz_config.toml");
        let loaded = Config::load().unwrap();
        let from_env = Config::from_env();

        assert_eq!(loaded.questions_file, from_env.questions_file);
        assert_eq!(loaded.max_questions, from_env.max_questions);
        assert_eq!(loaded.corpus, from_env.corpus);
    }

    #[test]
    fn invalid_toml_is_reported() {
        assert!(Config::from_toml_str("max_questions = \"many\"").is_err());
    }
}

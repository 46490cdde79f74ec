//! 应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：创建答案采集器、确定玩家名称
//! 2. **题库准备**：题库不存在时生成示例，加载并校验
//! 3. **运行测验**：委托 `QuizSession` 完成整轮答题
//! 4. **记录结果**：追加到结果文件，失败只警告
//!
//! 只有题库无法读取或没有有效题目时才会在开始前终止

use crate::config::Config;
use crate::error::CorpusError;
use crate::infrastructure::AnswerCollector;
use crate::models::loaders::{ensure_sample_corpus, load_corpus_file};
use crate::models::result::QuizResult;
use crate::orchestrator::quiz_session::QuizSession;
use crate::services::{ConsoleDisplay, FileSink, QuizDisplay, ResultRecorder};
use crate::utils::logging::{log_corpus_loaded, log_final_stats, log_startup};
use anyhow::Result;
use std::path::Path;
use tracing::{error, warn};

/// 玩家名称为空时使用的默认名称
pub const DEFAULT_PLAYER: &str = "Player";

/// 应用主结构
pub struct App {
    config: Config,
    collector: AnswerCollector,
    display: ConsoleDisplay,
    player: String,
}

impl App {
    /// 使用标准输入初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        Self::with_collector(config, AnswerCollector::stdin()).await
    }

    /// 使用指定输入流初始化应用
    pub async fn with_collector(config: Config, mut collector: AnswerCollector) -> Result<Self> {
        log_startup(&config);

        let mut display = ConsoleDisplay;
        display.notice("=== 控制台答题游戏 ===");

        let player = match config.player.as_deref() {
            Some(name) => normalize_player(name),
            None => {
                display.prompt("请输入你的名字: ");
                match collector.read_line().await {
                    Ok(name) => normalize_player(&name),
                    Err(e) => {
                        warn!("读取玩家名称失败: {}", e);
                        DEFAULT_PLAYER.to_string()
                    }
                }
            }
        };

        Ok(Self {
            config,
            collector,
            display,
            player,
        })
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// 运行应用主逻辑
    ///
    /// # 返回
    /// 题库为空时返回 `None`，否则返回本轮结果
    pub async fn run(mut self) -> Result<Option<QuizResult>> {
        let questions_path = Path::new(&self.config.questions_file).to_path_buf();

        if self.config.provision_sample {
            match ensure_sample_corpus(&questions_path).await {
                Ok(true) => self.display.notice(&format!(
                    "未找到 {}，已生成示例题库。可以编辑后重新运行。",
                    questions_path.display()
                )),
                Ok(false) => {}
                Err(e) => warn!("⚠️ 生成示例题库失败: {:#}", e),
            }
        }

        let report = match load_corpus_file(&questions_path, &self.config.corpus).await {
            Ok(report) => report,
            Err(e) => {
                error!("加载题库失败: {}", e);
                self.display.notice(&format!("加载题库失败: {}", e));
                return Err(e.into());
            }
        };
        log_corpus_loaded(&report);

        for skipped in &report.skipped {
            self.display.notice(&format!(
                "跳过格式错误的第 {} 行: {}",
                skipped.line_no, skipped.content
            ));
        }

        if report.questions.is_empty() {
            let empty = CorpusError::Empty {
                path: questions_path.display().to_string(),
            };
            warn!("⚠️ {}", empty);
            self.display.notice(&format!(
                "没有找到有效题目，请编辑 {}",
                questions_path.display()
            ));
            return Ok(None);
        }

        let mut session = QuizSession::new(self.collector, self.display);
        let outcome = session
            .run(report.questions, self.config.max_questions, &self.player)
            .await;
        let result = outcome.result;

        let mut recorder = ResultRecorder::new(FileSink::new(&self.config.results_file));
        let saved = recorder.record(&result);
        if saved {
            session
                .display_mut()
                .notice(&format!("\n结果已保存至 {}", self.config.results_file));
        } else {
            session
                .display_mut()
                .notice(&format!("警告: 无法写入结果文件 {}", self.config.results_file));
        }

        log_final_stats(&result, &self.config.results_file, saved);

        Ok(Some(result))
    }
}

fn normalize_player(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        DEFAULT_PLAYER.to_string()
    } else {
        name.to_string()
    }
}

//! # Console Quiz
//!
//! 一个在终端中运行的限时单选题测验程序
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（输入流），只暴露能力
//! - `AnswerCollector` - 唯一的输入流 owner，提供限时读取一行的能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `QuizDisplay` - 展示题目、判定和统计
//! - `ResultRecorder` - 追加结果行
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `QuestionCtx` - 上下文封装（玩家 + 题目编号）
//! - `QuestionFlow` - 流程编排（展示 → 采集 → 判定）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用生命周期，题库与结果文件
//! - `orchestrator/quiz_session` - 一轮测验，选题与统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Config, CorpusPolicy};
pub use error::{AppError, AppResult};
pub use infrastructure::{AnswerCollector, AnswerOutcome, AnswerSource};
pub use models::{Judgement, Letter, Question, QuizResult};
pub use orchestrator::{App, QuizSession, SessionOutcome};
pub use workflow::{QuestionCtx, QuestionFlow};

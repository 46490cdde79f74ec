//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用生命周期
//! - 加载配置后初始化输入流、确定玩家名称
//! - 准备并加载题库（`Vec<Question>`）
//! - 运行测验会话，记录结果
//!
//! ### `quiz_session` - 一轮测验
//! - 选题（打乱 + 截取）
//! - 遍历题目，复用 `QuestionFlow`
//! - 累计统计，生成 `QuizResult`
//!
//! ## 层次关系
//!
//! ```text
//! app (题库 + 结果文件)
//!     ↓
//! quiz_session (处理 Vec<Question>)
//!     ↓
//! workflow::QuestionFlow (处理单个 Question)
//!     ↓
//! services (能力层：display / result_recorder)
//!     ↓
//! infrastructure (基础设施：AnswerCollector)
//! ```

pub mod app;
pub mod quiz_session;

pub use app::App;
pub use quiz_session::{QuestionStats, QuizSession, SessionOutcome};

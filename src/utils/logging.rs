/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::models::loaders::LoadReport;
use crate::models::result::QuizResult;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志输出到 stderr，避免和题目混在一起。
/// 优先使用 `RUST_LOG`，否则详细模式为 info，普通模式为 warn。
/// 重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 控制台答题模式");
    info!("📁 题库文件: {}", config.questions_file);
    info!("📊 每轮最多题数: {}", config.max_questions);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
pub fn log_corpus_loaded(report: &LoadReport) {
    info!("✓ 找到 {} 道有效题目", report.questions.len());
    if !report.skipped.is_empty() {
        warn!("⚠️ 跳过 {} 条格式错误的记录", report.skipped.len());
    }
    info!("💡 空行和注释 {} 行", report.ignored);
}

/// 打印最终统计信息
pub fn log_final_stats(result: &QuizResult, results_file: &str, saved: bool) {
    info!("\n{}", "=".repeat(60));
    info!("📊 答题完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 答对: {}/{}", result.correct, result.total);
    info!("📝 作答: {}", result.attempted);
    info!("{}", "=".repeat(60));
    if saved {
        info!("\n结果已保存至: {}", results_file);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

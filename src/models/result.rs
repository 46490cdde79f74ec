use chrono::{Local, NaiveDateTime};

/// 结果行中的时间格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 一次测验的最终统计
///
/// 满足 `correct <= attempted <= total`，只在整轮测验结束后创建
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub player: String,
    pub timestamp: NaiveDateTime,
    pub attempted: usize,
    pub correct: usize,
    pub total: usize,
}

impl QuizResult {
    /// 使用当前本地时间创建结果
    pub fn new(player: impl Into<String>, attempted: usize, correct: usize, total: usize) -> Self {
        Self::at(Local::now().naive_local(), player, attempted, correct, total)
    }

    /// 使用指定时间创建结果
    pub fn at(
        timestamp: NaiveDateTime,
        player: impl Into<String>,
        attempted: usize,
        correct: usize,
        total: usize,
    ) -> Self {
        debug_assert!(correct <= attempted && attempted <= total);
        Self {
            player: player.into(),
            timestamp,
            attempted,
            correct,
            total,
        }
    }

    /// 正确率（百分比），总题数为 0 时按 1 计算避免除零
    pub fn percent(&self) -> f64 {
        percent(self.correct, self.total)
    }

    /// 保留两位小数的正确率，五入（不是银行家舍入）
    pub fn rounded_percent(&self) -> f64 {
        round_half_up(self.percent(), 2)
    }

    /// 格式化为结果文件中的一行
    ///
    /// `yyyy-MM-dd HH:mm:ss|玩家|attempted=n|correct=n|total=n|percent=n.nn`
    pub fn as_line(&self) -> String {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.player.clone(),
            format!("attempted={}", self.attempted),
            format!("correct={}", self.correct),
            format!("total={}", self.total),
            format!("percent={:.2}", self.rounded_percent()),
        ]
        .join("|")
    }
}

/// 计算正确率
pub fn percent(correct: usize, total: usize) -> f64 {
    correct as f64 * 100.0 / total.max(1) as f64
}

/// 按指定小数位四舍五入，恰好在中间时远离零
///
/// `{:.2}` 对恰好在中间的值向偶数舍入（3.125 → 3.12），这里先舍入再格式化
pub fn round_half_up(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

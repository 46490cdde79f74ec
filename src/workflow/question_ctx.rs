//! 题目上下文
//!
//! 封装"谁在答第几题"这一信息

use std::fmt::Display;

/// 题目上下文
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 玩家名称（仅用于日志显示）
    pub player: String,

    /// 题目编号（从1开始）
    pub number: usize,

    /// 本轮题目总数
    pub total: usize,
}

impl QuestionCtx {
    pub fn new(player: impl Into<String>, number: usize, total: usize) -> Self {
        Self {
            player: player.into(),
            number,
            total,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[玩家 {} 题目#{}/{}]", self.player, self.number, self.total)
    }
}

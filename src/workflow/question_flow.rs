//! 单题流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 展示题目
//! 2. 在时限内采集答案
//! 3. 判定并展示结果

use tracing::{debug, info};

use crate::infrastructure::AnswerSource;
use crate::models::answer::Judgement;
use crate::models::question::Question;
use crate::services::QuizDisplay;
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 单题流程
///
/// - 持有答案来源和显示协作方
/// - 每次只处理一道题，不累计分数
pub struct QuestionFlow<A, D> {
    source: A,
    display: D,
}

impl<A: AnswerSource, D: QuizDisplay> QuestionFlow<A, D> {
    pub fn new(source: A, display: D) -> Self {
        Self { source, display }
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// 拆出答案来源和显示协作方
    pub fn into_parts(self) -> (A, D) {
        (self.source, self.display)
    }

    /// 处理一道题并返回判定结果
    pub async fn run(&mut self, question: &Question, ctx: &QuestionCtx) -> Judgement {
        debug!("{} 题干: {}", ctx, truncate_text(question.text(), 80));

        self.display.show_question(ctx.number, question);

        let outcome = self.source.collect(question.time_limit()).await;
        let judgement = Judgement::judge(&outcome, question);
        debug!("{} 采集结果: {:?}", ctx, outcome);

        self.display.show_judgement(&judgement, question);
        info!("{} 判定: {:?}", ctx, judgement);

        judgement
    }
}

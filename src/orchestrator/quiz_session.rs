//! 测验会话 - 编排层
//!
//! ## 职责
//!
//! 1. **选题**：打乱全部题目，截取不超过上限的数量
//! 2. **流程调度**：逐题委托给 `QuestionFlow`
//! 3. **统计**：累计已作答和答对数量
//! 4. **结果**：整轮结束后才创建 `QuizResult`

use crate::infrastructure::AnswerSource;
use crate::models::answer::Judgement;
use crate::models::question::Question;
use crate::models::result::QuizResult;
use crate::services::QuizDisplay;
use crate::workflow::{QuestionCtx, QuestionFlow};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

/// 答题统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuestionStats {
    pub attempted: usize,
    pub correct: usize,
}

impl QuestionStats {
    /// 计入一道题的判定结果
    pub fn tally(&mut self, judgement: &Judgement) {
        if judgement.is_attempted() {
            self.attempted += 1;
        }
        if judgement.is_correct() {
            self.correct += 1;
        }
    }
}

/// 一轮测验的输出
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub result: QuizResult,
    /// 按出题顺序排列的判定结果
    pub judgements: Vec<Judgement>,
}

/// 测验会话
pub struct QuizSession<A, D, R = StdRng> {
    flow: QuestionFlow<A, D>,
    rng: R,
}

impl<A: AnswerSource, D: QuizDisplay> QuizSession<A, D, StdRng> {
    pub fn new(source: A, display: D) -> Self {
        Self::with_rng(source, display, StdRng::from_entropy())
    }
}

impl<A: AnswerSource, D: QuizDisplay, R: Rng> QuizSession<A, D, R> {
    /// 使用指定随机数生成器（测试中用固定种子）
    pub fn with_rng(source: A, display: D, rng: R) -> Self {
        Self {
            flow: QuestionFlow::new(source, display),
            rng,
        }
    }

    pub fn display_mut(&mut self) -> &mut D {
        self.flow.display_mut()
    }

    pub fn into_parts(self) -> (A, D) {
        self.flow.into_parts()
    }

    /// 打乱并截取本轮题目
    pub fn select(&mut self, mut questions: Vec<Question>, max_count: usize) -> Vec<Question> {
        questions.shuffle(&mut self.rng);
        questions.truncate(max_count);
        questions
    }

    /// 运行一整轮测验
    ///
    /// 每道题只问一次，不重试
    pub async fn run(
        &mut self,
        questions: Vec<Question>,
        max_count: usize,
        player: &str,
    ) -> SessionOutcome {
        let selected = self.select(questions, max_count);
        let total = selected.len();

        info!("玩家 {} 开始答题，共 {} 道", player, total);
        self.flow.display_mut().welcome(player, total);

        let mut stats = QuestionStats::default();
        let mut judgements = Vec::with_capacity(total);

        for (index, question) in selected.iter().enumerate() {
            let ctx = QuestionCtx::new(player, index + 1, total);
            let judgement = self.flow.run(question, &ctx).await;
            stats.tally(&judgement);
            judgements.push(judgement);
        }

        let result = QuizResult::new(player, stats.attempted, stats.correct, total);
        log_session_complete(&result);
        self.flow.display_mut().show_summary(&result);

        SessionOutcome { result, judgements }
    }
}

fn log_session_complete(result: &QuizResult) {
    info!(
        "玩家 {} 答题结束: 作答 {}/{}, 答对 {}, 正确率 {:.2}%",
        result.player,
        result.attempted,
        result.total,
        result.correct,
        result.percent()
    );
}

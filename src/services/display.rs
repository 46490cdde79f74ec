//! 显示服务 - 业务能力层
//!
//! 只负责把题目、判定结果和统计展示给玩家

use crate::models::answer::{Judgement, NoAnswerReason};
use crate::models::question::{Letter, Question};
use crate::models::result::QuizResult;
use std::io::Write;

/// 显示协作方
pub trait QuizDisplay {
    /// 开场信息
    fn welcome(&mut self, player: &str, count: usize);

    /// 展示一道题（编号从 1 开始）
    fn show_question(&mut self, number: usize, question: &Question);

    /// 展示判定结果
    fn show_judgement(&mut self, judgement: &Judgement, question: &Question);

    /// 展示最终统计
    fn show_summary(&mut self, result: &QuizResult);

    /// 其他提示
    fn notice(&mut self, message: &str);

    /// 等待输入前的提示（不换行）
    fn prompt(&mut self, message: &str);
}

/// 控制台显示
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl QuizDisplay for ConsoleDisplay {
    fn welcome(&mut self, player: &str, count: usize) {
        println!("\n你好, {}! 本轮共 {} 道题。", player, count);
        println!("请在时限内输入 A、B、C 或 D 作答。\n");
    }

    fn show_question(&mut self, number: usize, question: &Question) {
        println!("{}", render_question(number, question));
        print!("你的答案 (A/B/C/D): ");
        let _ = std::io::stdout().flush();
    }

    fn show_judgement(&mut self, judgement: &Judgement, question: &Question) {
        println!("{}", render_judgement(judgement, question));
    }

    fn show_summary(&mut self, result: &QuizResult) {
        println!("{}", render_summary(result));
    }

    fn notice(&mut self, message: &str) {
        println!("{}", message);
    }

    fn prompt(&mut self, message: &str) {
        print!("{}", message);
        let _ = std::io::stdout().flush();
    }
}

/// 题目文本：题干、四个选项和时限
pub fn render_question(number: usize, question: &Question) -> String {
    let mut lines = vec![format!("\nQ{}: {}", number, question.text())];
    for letter in Letter::ALL {
        lines.push(format!("{}) {}", letter, question.option(letter)));
    }
    lines.push(format!("(时限: {} 秒)", question.time_limit_seconds()));
    lines.join("\n")
}

/// 判定提示，答错或未作答时给出正确答案
pub fn render_judgement(judgement: &Judgement, question: &Question) -> String {
    let correct = question.correct();
    match judgement {
        Judgement::Correct => "✔ 正确!".to_string(),
        Judgement::Incorrect { .. } => format!("✘ 错误。正确答案: {}", correct),
        Judgement::InvalidLetter { .. } => format!("无效选项。正确答案: {}", correct),
        Judgement::NoAnswer(NoAnswerReason::TimedOut) => {
            format!("\n时间到! 未记录答案。正确答案: {}", correct)
        }
        Judgement::NoAnswer(NoAnswerReason::Failed(reason)) => {
            format!("输入错误: {}。正确答案: {}", reason, correct)
        }
        Judgement::NoAnswer(NoAnswerReason::Empty) => {
            format!("未记录答案。正确答案: {}", correct)
        }
    }
}

/// 最终统计
pub fn render_summary(result: &QuizResult) -> String {
    [
        "\n=== 结果 ===".to_string(),
        format!("玩家    : {}", result.player),
        format!("已作答  : {}/{}", result.attempted, result.total),
        format!("答对    : {}", result.correct),
        format!("正确率  : {:.2}%", result.rounded_percent()),
        "感谢参与!".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(
            "2+2?",
            ["2".into(), "3".into(), "4".into(), "5".into()],
            Letter::C,
            15,
        )
    }

    #[test]
    fn question_lists_labeled_options_and_limit() {
        let text = render_question(1, &question());
        assert!(text.contains("Q1: 2+2?"));
        assert!(text.contains("A) 2"));
        assert!(text.contains("D) 5"));
        assert!(text.contains("15 秒"));
    }

    #[test]
    fn non_correct_judgements_reveal_answer() {
        let q = question();
        assert!(!render_judgement(&Judgement::Correct, &q).contains("正确答案"));
        for judgement in [
            Judgement::Incorrect { given: Letter::A },
            Judgement::InvalidLetter { given: 'Z' },
            Judgement::NoAnswer(NoAnswerReason::TimedOut),
            Judgement::NoAnswer(NoAnswerReason::Empty),
        ] {
            assert!(render_judgement(&judgement, &q).contains("正确答案: C"));
        }
    }

    #[test]
    fn summary_shows_percent() {
        let result = QuizResult::new("Ada", 1, 1, 2);
        let text = render_summary(&result);
        assert!(text.contains("1/2"));
        assert!(text.contains("50.00%"));
    }

    #[test]
    fn summary_rounds_ties_up() {
        let result = QuizResult::new("Ada", 1, 1, 32);
        assert!(render_summary(&result).contains("3.13%"));
    }
}

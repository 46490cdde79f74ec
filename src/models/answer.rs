use crate::models::question::{Letter, Question};

/// 一次答案采集的结果
///
/// 每道题产生一次，立即被判定，不保存
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// 读到一行输入（已去除首尾空白）
    Answered(String),
    /// 超过时限
    TimedOut,
    /// 输入流关闭或读取失败
    AcquisitionFailed(String),
}

/// 未作答的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoAnswerReason {
    /// 输入了空行
    Empty,
    /// 超时
    TimedOut,
    /// 读取失败
    Failed(String),
}

/// 单道题的判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgement {
    Correct,
    Incorrect { given: Letter },
    /// 第一个字符不是 A-D
    InvalidLetter { given: char },
    NoAnswer(NoAnswerReason),
}

impl Judgement {
    /// 根据采集结果和题目判定
    ///
    /// 非空输入只看第一个字符，不区分大小写
    pub fn judge(outcome: &AnswerOutcome, question: &Question) -> Self {
        let text = match outcome {
            AnswerOutcome::Answered(text) if !text.is_empty() => text,
            AnswerOutcome::Answered(_) => return Judgement::NoAnswer(NoAnswerReason::Empty),
            AnswerOutcome::TimedOut => return Judgement::NoAnswer(NoAnswerReason::TimedOut),
            AnswerOutcome::AcquisitionFailed(reason) => {
                return Judgement::NoAnswer(NoAnswerReason::Failed(reason.clone()))
            }
        };

        // text 非空
        let first = text.chars().next().unwrap_or_default();
        match Letter::from_char(first) {
            Some(letter) if question.is_correct(letter) => Judgement::Correct,
            Some(letter) => Judgement::Incorrect { given: letter },
            None => Judgement::InvalidLetter {
                given: first.to_uppercase().next().unwrap_or(first),
            },
        }
    }

    /// 是否计入已作答
    pub fn is_attempted(&self) -> bool {
        !matches!(self, Judgement::NoAnswer(_))
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Judgement::Correct)
    }
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

    fn answered(text: &str) -> AnswerOutcome {
        AnswerOutcome::Answered(text.to_string())
    }

    #[test]
    fn matching_letter_is_correct_in_any_case() {
        assert_eq!(Judgement::judge(&answered("c"), &question()), Judgement::Correct);
        assert_eq!(Judgement::judge(&answered("C"), &question()), Judgement::Correct);
        assert_eq!(Judgement::judge(&answered("cat"), &question()), Judgement::Correct);
    }

    #[test]
    fn other_letter_is_incorrect() {
        assert_eq!(
            Judgement::judge(&answered("a"), &question()),
            Judgement::Incorrect { given: Letter::A }
        );
    }

    #[test]
    fn non_letter_is_invalid_but_attempted() {
        let judgement = Judgement::judge(&answered("z"), &question());
        assert_eq!(judgement, Judgement::InvalidLetter { given: 'Z' });
        assert!(judgement.is_attempted());
        assert!(!judgement.is_correct());
    }

    #[test]
    fn empty_timeout_and_failure_are_no_answer() {
        for outcome in [
            answered(""),
            AnswerOutcome::TimedOut,
            AnswerOutcome::AcquisitionFailed("输入流已关闭".to_string()),
        ] {
            let judgement = Judgement::judge(&outcome, &question());
            assert!(matches!(judgement, Judgement::NoAnswer(_)));
            assert!(!judgement.is_attempted());
        }
    }
}

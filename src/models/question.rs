use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 选项字母（A-D）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    A,
    B,
    C,
    D,
}

impl Letter {
    /// 按选项顺序排列的全部字母
    pub const ALL: [Letter; 4] = [Letter::A, Letter::B, Letter::C, Letter::D];

    /// 不区分大小写地识别单个字符
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            _ => None,
        }
    }

    /// 取字符串的第一个字符进行识别，空串返回 None
    pub fn parse_first(text: &str) -> Option<Self> {
        text.chars().next().and_then(Self::from_char)
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::A => 'A',
            Letter::B => 'B',
            Letter::C => 'C',
            Letter::D => 'D',
        }
    }

    /// 在选项数组中的位置
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 一道单选题
///
/// 由题库加载器从一条有效记录创建，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; 4],
    correct: Letter,
    time_limit_seconds: u32,
}

impl Question {
    /// 创建题目
    ///
    /// 时限为 0 时按 1 秒处理，保证时限始终为正数
    pub fn new(
        text: impl Into<String>,
        options: [String; 4],
        correct: Letter,
        time_limit_seconds: u32,
    ) -> Self {
        Self {
            text: text.into(),
            options,
            correct,
            time_limit_seconds: time_limit_seconds.max(1),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    /// 获取某个字母对应的选项内容
    pub fn option(&self, letter: Letter) -> &str {
        &self.options[letter.index()]
    }

    pub fn correct(&self) -> Letter {
        self.correct
    }

    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_seconds
    }

    /// 作答时限
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(u64::from(self.time_limit_seconds))
    }

    /// 题目是否以给定字母为正确答案（不区分大小写）
    pub fn is_correct(&self, letter: Letter) -> bool {
        self.correct == letter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "2+2?",
            ["2".into(), "3".into(), "4".into(), "5".into()],
            Letter::C,
            15,
        )
    }

    #[test]
    fn letters_are_case_insensitive() {
        assert_eq!(Letter::from_char('c'), Some(Letter::C));
        assert_eq!(Letter::from_char('D'), Some(Letter::D));
        assert_eq!(Letter::from_char('e'), None);
        assert_eq!(Letter::parse_first("b is my answer"), Some(Letter::B));
        assert_eq!(Letter::parse_first(""), None);
    }

    #[test]
    fn options_map_to_letters_in_order() {
        let q = sample();
        assert_eq!(q.option(Letter::A), "2");
        assert_eq!(q.option(Letter::C), "4");
        assert!(q.is_correct(Letter::C));
        assert!(!q.is_correct(Letter::A));
    }

    #[test]
    fn time_limit_is_always_positive() {
        let q = Question::new("q", Default::default(), Letter::A, 0);
        assert_eq!(q.time_limit_seconds(), 1);
        assert_eq!(sample().time_limit(), Duration::from_secs(15));
    }
}

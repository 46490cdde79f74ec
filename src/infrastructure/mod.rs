pub mod answer_collector;

pub use crate::models::answer::AnswerOutcome;
pub use answer_collector::{AnswerCollector, AnswerSource};

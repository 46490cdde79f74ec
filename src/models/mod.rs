pub mod answer;
pub mod loaders;
pub mod question;
pub mod result;

pub use answer::{AnswerOutcome, Judgement, NoAnswerReason};
pub use loaders::{load_corpus_file, parse_corpus, LoadReport, SkippedRecord};
pub use question::{Letter, Question};
pub use result::QuizResult;

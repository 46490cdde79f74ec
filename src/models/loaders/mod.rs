pub mod corpus_loader;
pub mod sample_corpus;

pub use corpus_loader::{load_corpus_file, parse_corpus, parse_record, LoadReport, SkippedRecord};
pub use sample_corpus::{ensure_sample_corpus, SAMPLE_CORPUS};

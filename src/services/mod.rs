pub mod display;
pub mod result_recorder;

pub use display::{ConsoleDisplay, QuizDisplay};
pub use result_recorder::{FileSink, MemorySink, ResultRecorder, ResultSink};

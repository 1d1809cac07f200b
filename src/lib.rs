pub mod cli;
pub mod copyright;
pub mod models;
pub mod scanner;
pub mod utils;

pub use copyright::{CopyrightTagger, LoadError, NoticeSpan, PosTag, TaggedToken};
pub use models::{ExtraData, FileInfo, FileType, Header, Output, SystemEnvironment};
pub use scanner::{ProcessResult, count, process};

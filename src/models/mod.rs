mod file_info;
mod output;

pub use file_info::{Copyright, FileInfo, FileInfoBuilder, FileType};
pub use output::{ExtraData, Header, OUTPUT_FORMAT_VERSION, Output, SystemEnvironment};

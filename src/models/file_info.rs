use derive_builder::Builder;
use serde::Serialize;

use crate::copyright::TaggedToken;

#[derive(Debug, Builder, Serialize)]
#[builder(build_fn(skip))]
pub struct FileInfo {
    pub name: String,
    pub base_name: String,
    pub extension: String,
    pub path: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[builder(default)]
    pub mime_type: Option<String>,
    pub size: u64,
    #[builder(default)]
    pub date: Option<String>,
    /// Set in match mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub has_copyright: Option<bool>,
    /// Set in extract mode only; empty when nothing was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub extracted_notice: Option<String>,
    #[builder(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub tokens: Vec<TaggedToken>,
    #[builder(default)]
    pub scan_errors: Vec<String>,
}

impl FileInfoBuilder {
    pub fn build(&self) -> Result<FileInfo, String> {
        Ok(FileInfo {
            name: self.name.clone().ok_or("Missing field: name")?,
            base_name: self.base_name.clone().ok_or("Missing field: base_name")?,
            extension: self.extension.clone().ok_or("Missing field: extension")?,
            path: self.path.clone().ok_or("Missing field: path")?,
            file_type: self.file_type.clone().ok_or("Missing field: file_type")?,
            mime_type: self.mime_type.clone().flatten(),
            size: self.size.ok_or("Missing field: size")?,
            date: self.date.clone().flatten(),
            has_copyright: self.has_copyright.flatten(),
            extracted_notice: self.extracted_notice.clone().flatten(),
            copyrights: self.copyrights.clone().unwrap_or_default(),
            tokens: self.tokens.clone().unwrap_or_default(),
            scan_errors: self.scan_errors.clone().unwrap_or_default(),
        })
    }
}

impl FileInfo {
    /// Whether any mode reported a notice for this file.
    pub fn has_copyright_notice(&self) -> bool {
        self.has_copyright == Some(true)
            || self
                .extracted_notice
                .as_deref()
                .is_some_and(|notice| !notice.is_empty())
            || !self.copyrights.is_empty()
    }
}

/// A notice found by span detection, with its text and location.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Copyright {
    pub copyright: String,
    pub start_byte: usize,
    pub end_byte: usize,
    /// 1-based line of the first byte.
    pub start_line: usize,
    /// 1-based line of the last byte.
    pub end_line: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    File,
    Directory,
}

impl Serialize for FileType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value = match self {
            FileType::File => "file",
            FileType::Directory => "directory",
        };
        serializer.serialize_str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_core_fields() {
        let err = FileInfoBuilder::default().build().unwrap_err();
        assert_eq!(err, "Missing field: name");
    }

    #[test]
    fn test_builder_defaults_and_serialization() {
        let info = FileInfoBuilder::default()
            .name("a.c".to_string())
            .base_name("a".to_string())
            .extension(".c".to_string())
            .path("src/a.c".to_string())
            .file_type(FileType::File)
            .size(12)
            .has_copyright(Some(true))
            .build()
            .unwrap();

        assert!(info.copyrights.is_empty());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["has_copyright"], true);
        assert!(json.get("extracted_notice").is_none());
        assert!(json.get("tokens").is_none());
        assert!(json["copyrights"].as_array().unwrap().is_empty());
    }
}

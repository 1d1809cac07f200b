use crate::cli::DetectionMode;
use crate::copyright::CopyrightTagger;
use crate::models::{Copyright, FileInfo, FileInfoBuilder, FileType};
use crate::scanner::ProcessResult;
use crate::utils::file::{get_creation_date, is_path_excluded, line_at_offset};
use anyhow::Error;
use content_inspector::inspect;
use glob::Pattern;
use indicatif::ProgressBar;
use log::warn;
use mime_guess::from_path;
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub fn process<P: AsRef<Path>>(
    path: P,
    max_depth: usize,
    progress_bar: Arc<ProgressBar>,
    exclude_patterns: &[Pattern],
    tagger: Arc<CopyrightTagger>,
    mode: DetectionMode,
) -> Result<ProcessResult, Error> {
    let path = path.as_ref();

    if is_path_excluded(path, exclude_patterns) {
        return Ok(ProcessResult {
            files: Vec::new(),
            excluded_count: 1,
        });
    }

    let metadata = fs::metadata(path)?;
    if metadata.is_file() {
        let file_info = process_file(path, &metadata, &tagger, mode)?;
        progress_bar.inc(1);
        return Ok(ProcessResult {
            files: vec![file_info],
            excluded_count: 0,
        });
    }

    let mut all_files = Vec::new();
    let mut total_excluded = 0;

    let entries: Vec<_> = fs::read_dir(path)?.filter_map(Result::ok).collect();

    let mut file_entries = Vec::new();
    let mut dir_entries = Vec::new();

    for entry in entries {
        let path = entry.path();

        if is_path_excluded(&path, exclude_patterns) {
            total_excluded += 1;
            continue;
        }

        match fs::metadata(&path) {
            Ok(metadata) if metadata.is_file() => file_entries.push((path, metadata)),
            Ok(metadata) if metadata.is_dir() => dir_entries.push((path, metadata)),
            _ => continue,
        }
    }

    // Process files in parallel
    let mut scanned = file_entries
        .par_iter()
        .map(|(path, metadata)| {
            let file_info = process_file(path, metadata, &tagger, mode);
            progress_bar.inc(1);
            file_info
        })
        .collect::<Result<Vec<_>, _>>()?;
    all_files.append(&mut scanned);

    for (path, metadata) in dir_entries {
        all_files.push(process_directory(&path, &metadata)?);

        if max_depth > 0 {
            match process(
                &path,
                max_depth - 1,
                progress_bar.clone(),
                exclude_patterns,
                tagger.clone(),
                mode,
            ) {
                Ok(mut result) => {
                    all_files.append(&mut result.files);
                    total_excluded += result.excluded_count;
                }
                Err(e) => warn!("Error processing directory {}: {}", path.display(), e),
            }
        }
    }

    Ok(ProcessResult {
        files: all_files,
        excluded_count: total_excluded,
    })
}

fn process_file(
    path: &Path,
    metadata: &fs::Metadata,
    tagger: &CopyrightTagger,
    mode: DetectionMode,
) -> Result<FileInfo, Error> {
    let mut scan_errors: Vec<String> = vec![];
    let mut file_info_builder = FileInfoBuilder::default();

    match fs::read(path) {
        Ok(buffer) => scan_content(&mut file_info_builder, &buffer, tagger, mode),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            scan_errors.push(e.to_string());
        }
    }

    file_info_builder
        .name(file_name(path))
        .base_name(
            path.file_stem()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        )
        .extension(
            path.extension()
                .map_or("".to_string(), |ext| format!(".{}", ext.to_string_lossy())),
        )
        .path(path.to_string_lossy().to_string())
        .file_type(FileType::File)
        .mime_type(Some(
            from_path(path)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
        ))
        .size(metadata.len())
        .date(get_creation_date(metadata))
        .scan_errors(scan_errors)
        .build()
        .map_err(Error::msg)
}

/// Run the detector selected by `mode` over file content.
///
/// Binary content is left unscanned.
pub fn scan_content(
    file_info_builder: &mut FileInfoBuilder,
    buffer: &[u8],
    tagger: &CopyrightTagger,
    mode: DetectionMode,
) {
    if inspect(buffer).is_binary() {
        return;
    }

    match mode {
        DetectionMode::Match => {
            file_info_builder.has_copyright(Some(tagger.is_match(buffer)));
        }
        DetectionMode::Extract => {
            file_info_builder.extracted_notice(Some(tagger.extract(buffer)));
        }
        DetectionMode::Spans => {
            let copyrights = tagger
                .find_all_index(buffer)
                .into_iter()
                .map(|span| Copyright {
                    copyright: String::from_utf8_lossy(&buffer[span.start..span.end])
                        .trim_end()
                        .to_string(),
                    start_byte: span.start,
                    end_byte: span.end,
                    start_line: line_at_offset(buffer, span.start),
                    end_line: line_at_offset(buffer, span.end.saturating_sub(1).max(span.start)),
                })
                .collect();
            file_info_builder.copyrights(copyrights);
        }
        DetectionMode::Tag => {
            file_info_builder.tokens(tagger.tag(buffer));
        }
    }
}

fn process_directory(path: &Path, metadata: &fs::Metadata) -> Result<FileInfo, Error> {
    let name = file_name(path);

    FileInfoBuilder::default()
        .base_name(name.clone()) // For directories, base_name is the same as name
        .name(name)
        .extension("".to_string())
        .path(path.to_string_lossy().to_string())
        .file_type(FileType::Directory)
        .size(0)
        .date(get_creation_date(metadata))
        .build()
        .map_err(Error::msg)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

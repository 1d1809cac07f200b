use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File or directory path to scan
    pub dir_path: String,

    /// Labeled training corpus (`word|~|tag` records separated by three spaces)
    #[arg(short, long)]
    pub corpus: String,

    /// What to report for each file
    #[arg(short = 'M', long, value_enum, default_value_t = DetectionMode::Extract)]
    pub mode: DetectionMode,

    /// Output file path
    #[arg(default_value = "copyright.json", short)]
    pub output_file: String,

    /// Maximum recursion depth (0 means no recursion)
    #[arg(short, long, default_value = "50")]
    pub max_depth: usize,

    /// Exclude patterns (glob patterns like "*.tmp" or "node_modules")
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMode {
    /// Whether the file contains a notice
    Match,
    /// Notice text, tokens joined by spaces
    Extract,
    /// Byte and line ranges of every notice
    Spans,
    /// Every token with its part-of-speech tag
    Tag,
}

impl DetectionMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Extract => "extract",
            Self::Spans => "spans",
            Self::Tag => "tag",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["copyright-tagger", "src", "--corpus", "corpus.in"]).unwrap();
        assert_eq!(cli.dir_path, "src");
        assert_eq!(cli.corpus, "corpus.in");
        assert_eq!(cli.mode, DetectionMode::Extract);
        assert_eq!(cli.output_file, "copyright.json");
        assert_eq!(cli.max_depth, 50);
        assert!(cli.exclude.is_empty());
    }

    #[test]
    fn test_parse_mode_and_excludes() {
        let cli = Cli::try_parse_from([
            "copyright-tagger",
            "src",
            "-c",
            "corpus.in",
            "--mode",
            "spans",
            "-e",
            "*.lock,target",
        ])
        .unwrap();
        assert_eq!(cli.mode, DetectionMode::Spans);
        assert_eq!(cli.exclude, vec!["*.lock", "target"]);
    }

    #[test]
    fn test_corpus_is_required() {
        assert!(Cli::try_parse_from(["copyright-tagger", "src"]).is_err());
    }
}

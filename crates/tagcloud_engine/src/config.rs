use std::num::ParseIntError;
use std::path::PathBuf;

use tagcloud_core::TieBreak;

/// Stylesheet link used by the reference output.
pub const DEFAULT_STYLESHEET: &str = "doc/tagcloud.css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stylesheet {
    /// `<link>` to an external sheet defining `.f11` through `.f48`.
    Linked(String),
    /// Generated `<style>` block so the page needs nothing else.
    Embedded,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet::Linked(DEFAULT_STYLESHEET.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub word_count: usize,
    pub tie_break: TieBreak,
    /// Heading label; the input path as given when unset.
    pub label: Option<String>,
    pub stylesheet: Stylesheet,
    /// Input encoding label; detected when unset.
    pub encoding: Option<String>,
    pub manifest_path: Option<PathBuf>,
}

impl CloudConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        word_count: usize,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            word_count,
            tie_break: TieBreak::default(),
            label: None,
            stylesheet: Stylesheet::default(),
            encoding: None,
            manifest_path: None,
        }
    }

    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.input_path.display().to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("word count must be a non-negative integer, got {input:?}: {source}")]
    InvalidWordCount {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses the number of words in the cloud from user input.
pub fn parse_word_count(input: &str) -> Result<usize, ConfigError> {
    let trimmed = input.trim();
    // usize::from_str takes a leading '+', which a count should not.
    let digits = if trimmed.starts_with('+') { "" } else { trimmed };
    digits
        .parse::<usize>()
        .map_err(|source| ConfigError::InvalidWordCount {
            input: input.to_string(),
            source,
        })
}

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::persist::PersistError;

/// Forward-only steps of one run; a run is idle until `Reading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Reading,
    Counting,
    Ranking,
    Scaling,
    Rendering,
    Writing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Reading => "reading",
            Stage::Counting => "counting",
            Stage::Ranking => "ranking",
            Stage::Scaling => "scaling",
            Stage::Rendering => "rendering",
            Stage::Writing => "writing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("failed to read input file {path:?}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode input file {path:?}: {source}")]
    InputDecode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
    #[error("failed to write output file {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: PersistError,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to close output file {path:?}: {source}")]
    StreamClose {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudSummary {
    pub output_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
    pub encoding_label: String,
    pub total_words: u64,
    pub distinct_words: usize,
    pub selected: usize,
    pub bytes_written: u64,
    /// Message of a close failure that happened after the output was in place.
    pub close_warning: Option<String>,
}

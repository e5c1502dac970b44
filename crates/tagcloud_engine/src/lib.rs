//! Tag cloud engine: file IO, rendering and the run pipeline.
mod config;
mod decode;
mod engine;
mod manifest;
mod persist;
mod render;
mod types;

pub use config::{parse_word_count, CloudConfig, ConfigError, Stylesheet, DEFAULT_STYLESHEET};
pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{generate, generate_with_progress, LogProgressSink, ProgressSink};
pub use manifest::{build_manifest, manifest_to_string};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError, StagedFile, Written};
pub use render::{escape_html, render_html, render_to_string};
pub use types::{CloudError, CloudSummary, Stage};

pub use tagcloud_core::TieBreak;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tagcloud_engine::{parse_word_count, CloudError, Stylesheet, TieBreak};

use crate::platform::logging::LogDestination;

#[derive(Parser, Debug)]
#[command(
    name = "tagcloud",
    author,
    version,
    about = "Builds an HTML tag cloud from the most frequent words of a text file."
)]
pub struct Cli {
    /// Text file to read; prompted for when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// HTML file to write; prompted for when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Number of words in the cloud; prompted for when omitted.
    #[arg(short = 'n', long = "words", value_name = "N", value_parser = parse_count_arg)]
    pub words: Option<usize>,

    /// Which of several equally frequent words wins the last slots.
    #[arg(long, value_enum, default_value_t = TieBreakArg::Reverse)]
    pub tie_break: TieBreakArg,

    /// Stylesheet href linked from the page.
    #[arg(long, value_name = "HREF", conflicts_with = "embed_styles")]
    pub stylesheet: Option<String>,

    /// Inline the size classes instead of linking a stylesheet.
    #[arg(long)]
    pub embed_styles: bool,

    /// Input encoding label (e.g. utf-8, latin1); detected when omitted.
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Label used in the title and heading instead of the input path.
    #[arg(long, value_name = "LABEL")]
    pub title: Option<String>,

    /// Also write a JSON manifest of the selected words.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Where log records go.
    #[arg(long, value_enum, default_value_t = LogArg::Terminal)]
    pub log: LogArg,

    /// Log per-stage progress.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    Reverse,
    Alphabetical,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Reverse => TieBreak::ReverseAlphabetical,
            TieBreakArg::Alphabetical => TieBreak::Alphabetical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    Terminal,
    File,
    Both,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::File => LogDestination::File,
            LogArg::Both => LogDestination::Both,
        }
    }
}

impl Cli {
    pub fn stylesheet(&self) -> Stylesheet {
        if self.embed_styles {
            return Stylesheet::Embedded;
        }
        match &self.stylesheet {
            Some(href) => Stylesheet::Linked(href.clone()),
            None => Stylesheet::default(),
        }
    }
}

fn parse_count_arg(src: &str) -> Result<usize, String> {
    parse_word_count(src).map_err(|e| CloudError::from(e).to_string())
}

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tagcloud_engine::{parse_word_count, CloudError};

use crate::cli::Cli;

/// Line-based question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the answer without its line ending.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTarget {
    pub input: PathBuf,
    pub output: PathBuf,
    pub word_count: usize,
}

/// Takes paths and count from `cli`, asking for whichever are missing.
pub fn resolve_target<R: BufRead, W: Write>(
    cli: &Cli,
    prompter: &mut Prompter<R, W>,
) -> Result<RunTarget> {
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => PathBuf::from(
            prompter
                .ask("Please enter the input file name: ")
                .context("reading input file name")?,
        ),
    };
    let output = match &cli.output {
        Some(path) => path.clone(),
        None => PathBuf::from(
            prompter
                .ask("Please enter the output file name: ")
                .context("reading output file name")?,
        ),
    };
    let word_count = match cli.words {
        Some(n) => n,
        None => {
            let answer = prompter
                .ask("Please enter the number of words in the tag cloud: ")
                .context("reading number of words in tag cloud")?;
            parse_word_count(&answer).map_err(CloudError::from)?
        }
    };

    Ok(RunTarget {
        input,
        output,
        word_count,
    })
}

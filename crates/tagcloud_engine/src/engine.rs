use std::fs;
use std::io;
use std::path::Path;

use tagcloud_core::{count_words, select_top, TagCloud};
use tagcloud_logging::{cloud_debug, cloud_info, cloud_warn};

use crate::config::CloudConfig;
use crate::decode::decode_text;
use crate::manifest::{build_manifest, manifest_to_string};
use crate::persist::{AtomicFileWriter, StagedFile, Written};
use crate::render::render_to_string;
use crate::{CloudError, CloudSummary, Stage};

/// Observer for stage transitions of a run.
pub trait ProgressSink {
    fn stage(&self, stage: Stage);
}

/// Reports stage transitions at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgressSink;

impl ProgressSink for LogProgressSink {
    fn stage(&self, stage: Stage) {
        cloud_debug!("stage -> {}", stage);
    }
}

/// Runs the whole pipeline for `config`, logging stages.
pub fn generate(config: &CloudConfig) -> Result<CloudSummary, CloudError> {
    generate_with_progress(config, &LogProgressSink)
}

/// Reads, counts, ranks, scales, renders and writes one tag cloud.
///
/// Any failure leaves the output path untouched: the manifest, when asked
/// for, is committed first and removed again if the HTML cannot be.
pub fn generate_with_progress(
    config: &CloudConfig,
    progress: &dyn ProgressSink,
) -> Result<CloudSummary, CloudError> {
    progress.stage(Stage::Reading);
    let bytes = fs::read(&config.input_path).map_err(|source| CloudError::InputRead {
        path: config.input_path.clone(),
        source,
    })?;
    let decoded = decode_text(&bytes, config.encoding.as_deref()).map_err(|source| {
        CloudError::InputDecode {
            path: config.input_path.clone(),
            source,
        }
    })?;
    cloud_debug!(
        "read {} bytes from {:?} as {}",
        bytes.len(),
        config.input_path,
        decoded.encoding_label
    );

    progress.stage(Stage::Counting);
    let frequencies = count_words(&decoded.text);
    let total_words = frequencies.total();
    let distinct_words = frequencies.len();

    progress.stage(Stage::Ranking);
    let selection = select_top(frequencies, config.word_count, config.tie_break);

    progress.stage(Stage::Scaling);
    let cloud =
        TagCloud::from_selection(selection, config.word_count, total_words, distinct_words);

    progress.stage(Stage::Rendering);
    let label = config.display_label();
    let html = render_to_string(&cloud, &label, &config.stylesheet);

    progress.stage(Stage::Writing);
    // Nothing is committed until every file is staged; the HTML goes last.
    let staged_html = stage_output(&config.output_path, &html)?;
    let staged_manifest = match &config.manifest_path {
        Some(path) => {
            let manifest = manifest_to_string(&build_manifest(&cloud, &label));
            Some(stage_output(path, &manifest)?)
        }
        None => None,
    };

    let manifest_written = staged_manifest.map(commit_output).transpose()?;
    let written = match commit_output(staged_html) {
        Ok(written) => written,
        Err(err) => {
            if let Some(manifest) = &manifest_written {
                let _ = fs::remove_file(&manifest.path);
            }
            return Err(err);
        }
    };

    let mut close_warning = report_close_error(&written.path, written.close_error);
    let manifest_path = manifest_written.map(|manifest| {
        let warning = report_close_error(&manifest.path, manifest.close_error);
        close_warning = close_warning.take().or(warning);
        manifest.path
    });

    progress.stage(Stage::Done);
    cloud_info!(
        "wrote {} of {} requested words ({} distinct, {} total) to {:?}",
        cloud.len(),
        config.word_count,
        distinct_words,
        total_words,
        written.path
    );

    Ok(CloudSummary {
        output_path: written.path,
        manifest_path,
        encoding_label: decoded.encoding_label,
        total_words,
        distinct_words,
        selected: cloud.len(),
        bytes_written: written.bytes,
        close_warning,
    })
}

/// Close failures happen after the file is in place, so they only warn.
fn report_close_error(path: &Path, error: Option<io::Error>) -> Option<String> {
    let source = error?;
    let err = CloudError::StreamClose {
        path: path.to_path_buf(),
        source,
    };
    cloud_warn!("{}", err);
    Some(err.to_string())
}

fn stage_output(path: &Path, content: &str) -> Result<StagedFile, CloudError> {
    let writer = AtomicFileWriter::new(path);
    writer
        .stage(content)
        .map_err(|source| CloudError::OutputWrite {
            path: writer.target().to_path_buf(),
            source,
        })
}

fn commit_output(staged: StagedFile) -> Result<Written, CloudError> {
    let path = staged.target().to_path_buf();
    staged
        .commit()
        .map_err(|source| CloudError::OutputWrite { path, source })
}

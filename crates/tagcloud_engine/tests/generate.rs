use std::cell::RefCell;
use std::fs;
use std::sync::Once;

use tagcloud_engine::{
    generate, generate_with_progress, CloudConfig, CloudError, ProgressSink, Stage, Stylesheet,
    TieBreak,
};
use tempfile::TempDir;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tagcloud_logging::initialize_for_tests);
}

const SENTENCE: &str = "the cat sat on the mat. the cat ran.\n";

#[derive(Default)]
struct RecordingSink {
    stages: RefCell<Vec<Stage>>,
}

impl ProgressSink for RecordingSink {
    fn stage(&self, stage: Stage) {
        self.stages.borrow_mut().push(stage);
    }
}

#[test]
fn end_to_end_writes_html() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("sample.txt");
    let output = temp.path().join("cloud.html");
    fs::write(&input, SENTENCE).unwrap();

    let mut config = CloudConfig::new(&input, &output, 3);
    config.label = Some("sample.txt".into());
    let summary = generate(&config).unwrap();

    assert_eq!(summary.output_path, output);
    assert_eq!(summary.total_words, 9);
    assert_eq!(summary.distinct_words, 6);
    assert_eq!(summary.selected, 3);
    assert!(summary.manifest_path.is_none());
    assert!(summary.close_warning.is_none());

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(summary.bytes_written, html.len() as u64);
    assert!(html.contains("<h2>Top 3 words in sample.txt</h2>"));
    let cat = html.find(">cat<").unwrap();
    let sat = html.find(">sat<").unwrap();
    let the = html.find(">the<").unwrap();
    assert!(cat < sat && sat < the);
    assert!(!html.contains(">on<"));
}

#[test]
fn stages_run_forward_once() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    fs::write(&input, SENTENCE).unwrap();

    let sink = RecordingSink::default();
    let config = CloudConfig::new(&input, temp.path().join("out.html"), 2);
    generate_with_progress(&config, &sink).unwrap();

    assert_eq!(
        sink.stages.into_inner(),
        vec![
            Stage::Reading,
            Stage::Counting,
            Stage::Ranking,
            Stage::Scaling,
            Stage::Rendering,
            Stage::Writing,
            Stage::Done,
        ]
    );
}

#[test]
fn missing_input_creates_no_output() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("cloud.html");
    let config = CloudConfig::new(temp.path().join("nope.txt"), &output, 5);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, CloudError::InputRead { .. }));
    assert!(err.to_string().contains("failed to read input file"));
    assert!(!output.exists());
}

#[test]
fn unwritable_output_is_reported() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let blocker = temp.path().join("blocker");
    fs::write(&input, SENTENCE).unwrap();
    fs::write(&blocker, "file, not dir").unwrap();

    let config = CloudConfig::new(&input, blocker.join("cloud.html"), 3);
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, CloudError::OutputWrite { .. }));
    assert!(err.to_string().contains("failed to write output file"));
}

#[test]
fn failed_run_keeps_previous_output() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("cloud.html");
    fs::write(&output, "previous").unwrap();

    let config = CloudConfig::new(temp.path().join("missing.txt"), &output, 3);
    assert!(generate(&config).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn failed_manifest_leaves_no_html() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    let blocker = temp.path().join("blocker");
    fs::write(&input, SENTENCE).unwrap();
    fs::write(&blocker, "file, not dir").unwrap();

    let mut config = CloudConfig::new(&input, &output, 3);
    config.manifest_path = Some(blocker.join("cloud.json"));
    let err = generate(&config).unwrap_err();

    assert!(matches!(err, CloudError::OutputWrite { .. }));
    assert!(err.to_string().contains("cloud.json"));
    assert!(!output.exists());
}

#[test]
fn failed_manifest_keeps_previous_html() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, SENTENCE).unwrap();
    fs::write(&output, "previous").unwrap();

    let mut config = CloudConfig::new(&input, &output, 3);
    // A directory cannot be replaced by the manifest file.
    config.manifest_path = Some(temp.path().to_path_buf());
    assert!(generate(&config).is_err());

    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    let leftovers: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name != "in.txt" && name != "out.html")
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
}

#[test]
fn reruns_are_byte_identical() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let text = "Zeta alpha beta. Beta gamma, delta; alpha! epsilon zeta ZETA eta theta iota\n"
        .repeat(7);
    fs::write(&input, text).unwrap();

    let first = temp.path().join("first.html");
    let second = temp.path().join("second.html");
    generate(&CloudConfig::new(&input, &first, 6)).unwrap();
    generate(&CloudConfig::new(&input, &second, 6)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn zero_words_still_writes_document() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, SENTENCE).unwrap();

    let summary = generate(&CloudConfig::new(&input, &output, 0)).unwrap();
    assert_eq!(summary.selected, 0);
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<div class=\"cdiv\">"));
    assert!(!html.contains("<span"));
}

#[test]
fn manifest_lists_selected_words() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let manifest = temp.path().join("meta").join("cloud.json");
    fs::write(&input, SENTENCE).unwrap();

    let mut config = CloudConfig::new(&input, temp.path().join("out.html"), 3);
    config.label = Some("in.txt".into());
    config.manifest_path = Some(manifest.clone());
    config.tie_break = TieBreak::Alphabetical;
    let summary = generate(&config).unwrap();
    assert_eq!(summary.manifest_path.as_deref(), Some(manifest.as_path()));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(value["source"], "in.txt");
    assert_eq!(value["requested"], 3);
    assert_eq!(value["selected"], 3);
    assert_eq!(value["total_words"], 9);
    assert_eq!(value["distinct_words"], 6);
    let words: Vec<_> = value["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| (w["word"].as_str().unwrap(), w["count"].as_u64().unwrap()))
        .collect();
    assert_eq!(words, vec![("cat", 2), ("mat", 1), ("the", 3)]);
    assert_eq!(value["words"][2]["font_size"], 48);
}

#[test]
fn latin1_input_with_explicit_encoding() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, b"Caf\xE9 caf\xE9 th\xE9").unwrap();

    let mut config = CloudConfig::new(&input, &output, 2);
    config.encoding = Some("iso-8859-1".into());
    config.stylesheet = Stylesheet::Embedded;
    let summary = generate(&config).unwrap();

    assert_eq!(summary.encoding_label, "windows-1252");
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("title=\"count: 2\">café</span>"));
    assert!(html.contains(">thé<"));
}

#[test]
fn unknown_encoding_is_a_decode_error() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.txt");
    let output = temp.path().join("out.html");
    fs::write(&input, SENTENCE).unwrap();

    let mut config = CloudConfig::new(&input, &output, 2);
    config.encoding = Some("not-an-encoding".into());
    let err = generate(&config).unwrap_err();
    assert!(matches!(err, CloudError::InputDecode { .. }));
    assert!(!output.exists());
}

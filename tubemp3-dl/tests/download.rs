//! MP3 preset download integration tests.
//!
//! Tests: YouTube download, `.mp3` output next to the prepared filename,
//! info dict fields, metadata-only probe.
//!
//! Uses "Me at the zoo" (jNQXAC9IVRw) - predictable metadata.

use eyre::{Context, Result, ensure};
use std::path::PathBuf;
use std::sync::LazyLock;
use tempfile::TempDir;
use tubemp3_dl::dl::{DownloadInfo, DownloadOptions, OutputPaths, OutputTemplates, extract, probe};
use tubemp3_dl::mp3::Mp3Preset;

const TEST_URL: &str = "https://youtu.be/jNQXAC9IVRw";
const TEST_EXTRACTOR: &str = "Youtube";
const TEST_UPLOADER: &str = "jawed";
const TEST_ID: &str = "jNQXAC9IVRw";
const TEST_TITLE: &str = "Me at the zoo";

struct TestContext {
    _temp_dir: TempDir,
    file_path: PathBuf,
    info: DownloadInfo,
}

static TEST_CONTEXT: LazyLock<Result<TestContext>> = LazyLock::new(|| {
    let temp_dir = tempfile::tempdir().context("failed to create temp dir")?;

    let mut preset: DownloadOptions = Mp3Preset::default().into();
    preset.paths = Some(OutputPaths::default().with_home(temp_dir.path()));
    preset.outtmpl = Some(OutputTemplates::simple("%(id)s.%(ext)s".to_string()));

    let (prepared, info) =
        extract(TEST_URL, preset, None).context("yt-dlp download failed for MP3 preset")?;

    let file_path = prepared.with_extension("mp3");

    ensure!(
        file_path.exists(),
        "converted file not found at: {:?}",
        file_path.display()
    );

    Ok(TestContext {
        _temp_dir: temp_dir,
        file_path,
        info,
    })
});

#[track_caller]
fn get_test_context() -> &'static TestContext {
    TEST_CONTEXT.as_ref().expect("download failed")
}

#[test]
#[ignore = "network I/O"]
fn mp3_file_exist() {
    let ctx = get_test_context();

    assert!(
        ctx.file_path.ends_with(format!("{TEST_ID}.mp3")),
        "unexpected file name: {:?}",
        ctx.file_path.display()
    );
}

#[test]
#[ignore = "network I/O"]
fn thumbnail_embedded_not_left_behind() {
    let ctx = get_test_context();
    let dir = ctx.file_path.parent().expect("file has a parent");

    let leftovers: Vec<_> = std::fs::read_dir(dir)
        .expect("failed to read output dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path() != ctx.file_path)
        .collect();

    assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
}

#[test]
#[ignore = "network I/O"]
fn info_dict_fields() {
    let ctx = get_test_context();

    match &ctx.info {
        DownloadInfo {
            id: Some(id),
            title: Some(title),
            extractor_key: Some(extractor_key),
            uploader: Some(uploader),
            ..
        } if id == TEST_ID
            && title == TEST_TITLE
            && extractor_key == TEST_EXTRACTOR
            && uploader == TEST_UPLOADER => {}
        info => panic!("unexpected info: {info:?}"),
    }
}

#[test]
#[ignore = "network I/O"]
fn probe_does_not_download() {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");

    let opts = DownloadOptions {
        paths: Some(OutputPaths::default().with_home(temp_dir.path())),
        skip_download: Some(true),
        quiet: Some(true),
        ..Default::default()
    };

    let (filename, info) = probe(TEST_URL, opts)
        .expect("probe failed")
        .expect("probe returned no info");

    assert_eq!(info.title.as_deref(), Some(TEST_TITLE));
    assert!(filename.starts_with(temp_dir.path()));
    assert_eq!(
        std::fs::read_dir(temp_dir.path()).unwrap().count(),
        0,
        "probe wrote files"
    );
}

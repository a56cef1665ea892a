use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pdf_images::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_fn(width, height, |x, y| Rgb([(x * 3) as u8, (y * 5) as u8, 200]))
        .save(&path)
        .unwrap();
    path
}

fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();
    path
}

fn options_in(dir: &Path, name: &str) -> ConversionOptions {
    ConversionOptions {
        output_name: dir.join(name).to_string_lossy().into_owned(),
        ..ConversionOptions::default()
    }
}

#[derive(Debug, Default)]
struct Events {
    progress: Vec<Progress>,
    skipped: Vec<SkippedImage>,
    finished: Option<ConversionSummary>,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Events>>);

impl ProgressObserver for Recorder {
    fn page_committed(&mut self, progress: &Progress) {
        self.0.lock().unwrap().progress.push(progress.clone());
    }

    fn image_skipped(&mut self, skipped: &SkippedImage) {
        self.0.lock().unwrap().skipped.push(skipped.clone());
    }

    fn finished(&mut self, summary: &ConversionSummary) {
        self.0.lock().unwrap().finished = Some(summary.clone());
    }
}

fn media_box(doc: &lopdf::Document, page_id: lopdf::ObjectId) -> Vec<f32> {
    doc.get_object(page_id)
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_float().unwrap())
        .collect()
}

#[tokio::test]
async fn test_corrupt_image_is_skipped() {
    let dir = TempDir::new().unwrap();
    let selection: Selection = [
        write_png(dir.path(), "one.png", 40, 20),
        write_corrupt(dir.path(), "two.png"),
        write_png(dir.path(), "three.png", 20, 40),
    ]
    .into_iter()
    .map(ImageRef::new)
    .collect();

    let options = options_in(dir.path(), "album");
    let recorder = Recorder::default();
    let report = convert(&selection, &options, recorder.clone()).await.unwrap();

    assert_eq!(report.output_path, dir.path().join("album.pdf"));
    assert_eq!(report.page_count(), 2);
    assert_eq!(report.total, 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.skipped[0].file_name(), "two.png");

    let doc = lopdf::Document::load(&report.output_path).unwrap();
    assert_eq!(doc.get_pages().len(), 2);

    let events = recorder.0.lock().unwrap();
    assert_eq!(events.skipped.len(), 1);
    let processed: Vec<usize> = events.progress.iter().map(|p| p.processed).collect();
    assert_eq!(processed, vec![1, 2]);
    assert!(events.progress.iter().all(|p| p.total == 3));

    let summary = events.finished.as_ref().expect("finished should be reported");
    assert_eq!(summary.pages, 2);
    assert_eq!(
        summary.status_line(),
        format!("Successfully created {} with 2 pages", report.output_path.display())
    );
}

#[tokio::test]
async fn test_empty_selection_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let options = options_in(dir.path(), "empty");

    let result = convert(&Selection::new(), &options, NoopObserver).await;

    assert!(matches!(result, Err(ConvertError::EmptySelection)));
    assert!(!dir.path().join("empty.pdf").exists());
}

#[tokio::test]
async fn test_all_images_invalid_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let selection: Selection = [
        write_corrupt(dir.path(), "a.png"),
        dir.path().join("missing.jpg"),
    ]
    .into_iter()
    .map(ImageRef::new)
    .collect();

    let options = options_in(dir.path(), "nothing");
    let recorder = Recorder::default();
    let result = convert(&selection, &options, recorder.clone()).await;

    assert!(matches!(result, Err(ConvertError::NoPages)));
    assert!(!dir.path().join("nothing.pdf").exists());

    let events = recorder.0.lock().unwrap();
    assert_eq!(events.skipped.len(), 2);
    assert!(events.finished.is_none());
}

#[tokio::test]
async fn test_unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let selection: Selection = [write_png(dir.path(), "a.png", 10, 10)]
        .into_iter()
        .map(ImageRef::new)
        .collect();

    let options = options_in(&dir.path().join("no_such_dir"), "out");
    let result = convert(&selection, &options, NoopObserver).await;

    assert!(matches!(result, Err(ConvertError::Io(_))));
}

#[tokio::test]
async fn test_conversion_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let selection: Selection = [
        write_png(dir.path(), "wide.png", 64, 16),
        write_png(dir.path(), "tall.png", 16, 64),
    ]
    .into_iter()
    .map(ImageRef::new)
    .collect();

    let mut options = options_in(dir.path(), "same");
    options.placement = Placement::TopRight;

    let first = convert(&selection, &options, NoopObserver).await.unwrap();
    let second = convert(&selection, &options, NoopObserver).await.unwrap();

    assert_eq!(first.pages, second.pages);

    let doc = lopdf::Document::load(&second.output_path).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn test_build_document_pages_follow_options() {
    let dir = TempDir::new().unwrap();
    let images = vec![
        ImageRef::new(write_png(dir.path(), "a.png", 200, 100)),
        ImageRef::new(write_png(dir.path(), "b.png", 100, 300)),
    ];

    let options = ConversionOptions {
        page_size: PageSize::Letter,
        placement: Placement::Stretch,
        title: Some("Scans".to_string()),
        ..ConversionOptions::default()
    };

    let mut observer = NoopObserver;
    let assembled = build_document(&images, &options, &mut observer).unwrap();

    assert_eq!(assembled.total, 2);
    assert!(assembled.skipped.is_empty());
    assert_eq!(assembled.pages[0].image_size, (200, 100));
    assert_eq!(assembled.pages[1].image_size, (100, 300));
    for record in &assembled.pages {
        assert_eq!(record.descriptor.rect, DrawRect::new(0.0, 0.0, 612.0, 792.0));
    }

    let pages = assembled.document.get_pages();
    assert_eq!(pages.len(), 2);
    for page_id in pages.values() {
        assert_eq!(media_box(&assembled.document, *page_id), vec![0.0, 0.0, 612.0, 792.0]);
    }
}

#[test]
fn test_page_order_matches_selection_order() {
    let dir = TempDir::new().unwrap();
    let images = vec![
        ImageRef::new(write_png(dir.path(), "z.png", 30, 10)),
        ImageRef::new(write_png(dir.path(), "a.png", 10, 30)),
        ImageRef::new(write_png(dir.path(), "m.png", 10, 10)),
    ];

    let mut names = Vec::new();
    let mut observer = FnObserver(|p: &Progress| names.push(p.file_name.clone()));
    let assembled =
        build_document(&images, &ConversionOptions::default(), &mut observer).unwrap();

    assert_eq!(names, vec!["z.png", "a.png", "m.png"]);
    let sources: Vec<_> = assembled.pages.iter().map(|p| p.source.clone()).collect();
    let expected: Vec<_> = images.iter().map(|i| i.path().to_path_buf()).collect();
    assert_eq!(sources, expected);
}

#[test]
fn test_transparent_image_gets_a_page() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(12, 12, Rgba([255, 0, 0, 128]))
        .save(&path)
        .unwrap();

    let mut observer = NoopObserver;
    let assembled = build_document(
        &[ImageRef::new(&path)],
        &ConversionOptions::default(),
        &mut observer,
    )
    .unwrap();

    assert_eq!(assembled.pages.len(), 1);
    assert!(assembled.skipped.is_empty());
}

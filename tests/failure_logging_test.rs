// A failed file is reported exactly once across converter and batch driver
use std::fs;
use std::sync::Mutex;

use dot_svg::batch::{self, BatchConfig};
use image::{Rgba, RgbaImage};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct CapturingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};

#[test]
fn test_bad_file_logged_once() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(6, 6, Rgba([1, 2, 3, 255]))
        .save(dir.path().join("good.png"))
        .unwrap();
    fs::write(dir.path().join("broken.png"), b"corrupt").unwrap();

    let config = BatchConfig {
        input_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let report = batch::run(&config).unwrap();
    assert_eq!(report.failed(), 1);

    let records = LOGGER.records.lock().unwrap();
    let failures: Vec<_> = records
        .iter()
        .filter(|(level, msg)| *level <= Level::Warn && msg.contains("broken.png"))
        .collect();
    assert_eq!(failures.len(), 1, "{failures:?}");
    assert_eq!(failures[0].0, Level::Error);
}

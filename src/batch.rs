//! 批量转换驱动
//!
//! # 设计思路
//!
//! 枚举输入目录下所有 `*.png`，逐个转换为同名 `.svg`。
//! 单个文件失败只记录日志并计入报告，不会中断整批处理；
//! 目录缺失或没有输入文件时返回对应的 `BatchError`。
//!
//! # 实现思路
//!
//! - 扩展名匹配不区分大小写。
//! - 按文件名排序，保证多次运行的处理顺序一致。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::dot_svg::{self, BatchError, ColorMode, ConversionConfig, ConversionError};
use crate::error::AppError;

const INPUT_EXTENSION: &str = "png";
const OUTPUT_EXTENSION: &str = "svg";

/// 批处理配置。
///
/// 所有字段都可由 `dot-svg.json` 覆盖，缺省值与参考行为一致。
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub dot_size: f64,
    pub spacing: u32,
    pub default_color: String,
    pub color_mode: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("./src"),
            dot_size: 1.5,
            spacing: 6,
            default_color: "white".to_string(),
            color_mode: ColorMode::Sampled.as_str().to_string(),
        }
    }
}

impl BatchConfig {
    /// 生成每个文件共用的转换配置。
    pub fn conversion(&self) -> Result<ConversionConfig, ConversionError> {
        let config = ConversionConfig {
            dot_size: self.dot_size,
            spacing: self.spacing,
            default_color: self.default_color.clone(),
            color_mode: ColorMode::from_str(&self.color_mode)?,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }
}

/// 单个文件的转换结果。
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: Result<(), ConversionError>,
}

/// 批处理报告。
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }
}

/// 列出目录中的 PNG 文件（按文件名排序）。
pub fn find_input_files(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::DirectoryMissing(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_input_extension(path))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(BatchError::NoInputFiles(dir.to_path_buf()));
    }
    Ok(files)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// 同目录、同名、`.svg` 扩展名。
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

/// 执行整批转换。
pub fn run_batch(
    config: &BatchConfig,
    conversion: &ConversionConfig,
) -> Result<BatchReport, BatchError> {
    let files = find_input_files(&config.input_dir)?;
    log::info!(
        "🗂️ 发现 {} 个 PNG 文件 - 目录: {}",
        files.len(),
        config.input_dir.display()
    );

    let mut report = BatchReport::default();
    for input in files {
        let output = output_path_for(&input);
        // 失败已由 convert 记录
        let result = dot_svg::convert(&input, &output, conversion);
        report.outcomes.push(FileOutcome { input, output, result });
    }

    log::info!("🏁 批处理完成：成功 {} 个，失败 {} 个", report.converted(), report.failed());
    Ok(report)
}

/// 应用入口：由批处理配置推导转换参数并执行整批转换。
///
/// 参数错误映射为 `AppError::Conversion`，目录级错误映射为 `AppError::Batch`。
pub fn run(config: &BatchConfig) -> Result<BatchReport, AppError> {
    let conversion = config.conversion()?;
    Ok(run_batch(config, &conversion)?)
}

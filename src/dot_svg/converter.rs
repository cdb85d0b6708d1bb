//! # 核心编排模块
//!
//! ## 设计思路
//!
//! 转换链路固定为：
//! 1. 校验配置
//! 2. 加载并解码源图（含像素上限检查）
//! 3. 按步长采样生成文档
//! 4. 一次性写入输出文件（覆盖已存在文件）
//!
//! 加载失败时不会创建输出文件。写入不是原子的，中途失败可能留下不完整文件。
//! 记录 `load/sample/write/total` 阶段耗时，便于性能诊断。

use std::path::Path;
use std::time::Instant;

use super::loader::load_rgba;
use super::sampler::render_dot_svg;
use super::{ColorMode, ConversionConfig, ConversionError};

/// 转换主入口：读取 `input`，写出点阵 SVG 到 `output`。
///
/// 任何失败都在这里记录一次日志后返回，调用方无需重复记录。
///
/// # 示例
/// ```rust,no_run
/// use dot_svg::dot_svg::{convert, ConversionConfig};
///
/// convert("src/logo.png", "src/logo.svg", &ConversionConfig::default())?;
/// # Ok::<(), dot_svg::dot_svg::ConversionError>(())
/// ```
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<(), ConversionError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let result = convert_file(input, output, config);
    if let Err(err) = &result {
        log::error!("❌ 转换失败 {}: {}", input.display(), err);
    }
    result
}

fn convert_file(
    input: &Path,
    output: &Path,
    config: &ConversionConfig,
) -> Result<(), ConversionError> {
    config.validate()?;
    let total_start = Instant::now();

    let load_start = Instant::now();
    let image = load_rgba(input, config)?;
    let load_ms = load_start.elapsed().as_millis();

    let sample_start = Instant::now();
    let doc = render_dot_svg(&image, config);
    let svg = doc.render();
    let sample_ms = sample_start.elapsed().as_millis();

    let write_start = Instant::now();
    std::fs::write(output, svg.as_bytes()).map_err(|source| ConversionError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    let write_ms = write_start.elapsed().as_millis();

    log::debug!(
        "⏱️ 阶段耗时 - load: {}ms sample: {}ms write: {}ms total: {}ms（{}x{}, {} 个圆点）",
        load_ms,
        sample_ms,
        write_ms,
        total_start.elapsed().as_millis(),
        doc.width,
        doc.height,
        doc.circles.len()
    );
    log::info!("✅ 已转换 {} -> {}", input.display(), output.display());

    Ok(())
}

/// 位置参数形式的入口。
///
/// `default_color` 仅用于配置对称：颜色始终取自采样像素。
pub fn convert_to_dot_svg(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    dot_size: f64,
    spacing: u32,
    default_color: &str,
) -> Result<(), ConversionError> {
    let config = ConversionConfig {
        dot_size,
        spacing,
        default_color: default_color.to_string(),
        color_mode: ColorMode::Sampled,
        ..Default::default()
    };
    convert(input, output, &config)
}

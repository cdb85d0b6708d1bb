//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 先读取图片头信息做像素上限检查，再进行完整解码，尽早失败，
//! 避免超大图片在解码阶段占用过多内存。
//!
//! ## 实现思路
//!
//! 1. 一次性读入文件字节，header 检查与解码都基于同一份内存数据
//! 2. 猜测格式并读取 header 尺寸，按 `max_decoded_pixels` 快速拒绝
//! 3. 完整解码并转换为 RGBA8

use std::io::Cursor;
use std::path::Path;

use image::{ImageReader, RgbaImage};

use super::{ConversionConfig, ConversionError};

/// 从本地路径加载图片并转换为 RGBA 像素缓冲。
pub(crate) fn load_rgba(
    path: &Path,
    config: &ConversionConfig,
) -> Result<RgbaImage, ConversionError> {
    log::debug!("📁 开始读取图片 - 路径: {}", path.display());

    let bytes = std::fs::read(path).map_err(|e| ConversionError::LoadFailure {
        path: path.to_path_buf(),
        source: image::ImageError::IoError(e),
    })?;
    decode_from_memory(path, &bytes, config)
}

/// 基于同一份字节完成 header 检查与解码。
fn decode_from_memory(
    path: &Path,
    bytes: &[u8],
    config: &ConversionConfig,
) -> Result<RgbaImage, ConversionError> {
    let load_failure = |source: image::ImageError| ConversionError::LoadFailure {
        path: path.to_path_buf(),
        source,
    };

    let (width, height) = inspect_dimensions_from_memory(bytes).map_err(load_failure)?;
    validate_pixel_limits(config, width, height)?;

    let decoded = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(load_failure)?;

    Ok(decoded.to_rgba8())
}

/// 仅通过内存中的图片头信息读取宽高。
fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), image::ImageError> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()
}

/// 校验像素数量是否超过配置上限。
fn validate_pixel_limits(
    config: &ConversionConfig,
    width: u32,
    height: u32,
) -> Result<(), ConversionError> {
    let pixels = (width as u64)
        .checked_mul(height as u64)
        .ok_or_else(|| ConversionError::ResourceLimit("图片像素数溢出".to_string()))?;

    if pixels > config.max_decoded_pixels {
        return Err(ConversionError::ResourceLimit(format!(
            "图片像素过大：{} 像素（限制：{} 像素）",
            pixels, config.max_decoded_pixels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        let err = load_rgba(&missing, &ConversionConfig::default()).unwrap_err();
        assert!(matches!(err, ConversionError::LoadFailure { .. }));
    }

    #[test]
    fn test_garbage_bytes_are_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_rgba(&path, &ConversionConfig::default()).unwrap_err();
        assert!(matches!(err, ConversionError::LoadFailure { .. }));
    }

    #[test]
    fn test_limit_and_decode_use_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        RgbaImage::from_pixel(20, 20, Rgba([9, 8, 7, 255])).save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        // 文件已删除，检查与解码都只依赖内存中的字节
        let config = ConversionConfig {
            max_decoded_pixels: 399,
            ..Default::default()
        };
        assert!(matches!(
            decode_from_memory(&path, &bytes, &config),
            Err(ConversionError::ResourceLimit(_))
        ));

        let image = decode_from_memory(&path, &bytes, &ConversionConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (20, 20));
        assert_eq!(image.get_pixel(19, 19).0, [9, 8, 7, 255]);
    }

    #[test]
    fn test_pixel_limit_rejects_before_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 255])).save(&path).unwrap();

        let config = ConversionConfig {
            max_decoded_pixels: 399,
            ..Default::default()
        };
        assert!(matches!(load_rgba(&path, &config), Err(ConversionError::ResourceLimit(_))));

        let config = ConversionConfig {
            max_decoded_pixels: 400,
            ..Default::default()
        };
        let image = load_rgba(&path, &config).unwrap();
        assert_eq!(image.dimensions(), (20, 20));
    }
}

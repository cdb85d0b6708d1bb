//! # 采样模块
//!
//! 按固定步长遍历像素网格，每个 alpha 超过阈值的采样点生成一个圆点。
//! 不做邻域插值：圆点的颜色与透明度只取决于单个采样像素。

use image::RgbaImage;

use super::config::VISIBILITY_THRESHOLD;
use super::source::{hex_color, DotCircle, SvgDocument};
use super::{ColorMode, ConversionConfig};

/// 将 RGBA 图像转换为点阵文档（纯函数，无 I/O）。
///
/// 调用方负责先执行 `ConversionConfig::validate`；`spacing` 为 0 时返回空文档。
///
/// # 示例
/// ```
/// use dot_svg::dot_svg::{render_dot_svg, ConversionConfig};
/// use image::{Rgba, RgbaImage};
///
/// let image = RgbaImage::from_pixel(12, 12, Rgba([255, 0, 0, 255]));
/// let doc = render_dot_svg(&image, &ConversionConfig::default());
/// assert_eq!(doc.circles.len(), 4);
/// ```
pub fn render_dot_svg(image: &RgbaImage, config: &ConversionConfig) -> SvgDocument {
    let (width, height) = image.dimensions();
    let mut doc = SvgDocument::new(width, height);

    if config.spacing == 0 {
        return doc;
    }

    let step = config.spacing as usize;
    let half = f64::from(config.spacing) / 2.0;

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let [r, g, b, a] = image.get_pixel(x, y).0;
            if a <= VISIBILITY_THRESHOLD {
                continue;
            }

            let fill = match config.color_mode {
                ColorMode::Sampled => hex_color(r, g, b),
                ColorMode::Monochrome => config.default_color.clone(),
            };

            doc.push(DotCircle {
                cx: f64::from(x) + half,
                cy: f64::from(y) + half,
                r: config.dot_size,
                fill,
                opacity: f64::from(a) / 255.0,
            });
        }
    }

    doc
}

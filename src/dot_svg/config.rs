//! # 配置模块
//!
//! ## 设计思路
//!
//! 将单次转换的所有可调参数集中到 `ConversionConfig`，保证转换行为可预测、可测试。
//! 配置在调用期间不可变；批量驱动为每个文件传入同一份配置。
//!
//! ## 实现思路
//!
//! - `Default` 提供与参考行为一致的参数（半径 1.5、步长 6、默认颜色 white）。
//! - `validate` 在任何 I/O 之前拒绝非法参数。
//! - `ColorMode` 负责颜色模式字符串解析与反向输出。

use once_cell::sync::Lazy;
use regex::Regex;

use super::ConversionError;

/// 可见性阈值：alpha 严格大于该值的采样点才会输出圆点。
pub const VISIBILITY_THRESHOLD: u8 = 128;

/// 合法填充色：`#rgb`、`#rrggbb` 或 CSS 颜色关键字（如 `white`、`currentColor`）。
static FILL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#[0-9a-fA-F]{3}|#[0-9a-fA-F]{6}|[a-zA-Z]+)$").unwrap()
});

/// 圆点颜色来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 使用采样像素自身的 RGB 颜色。
    #[default]
    Sampled,
    /// 所有圆点统一使用 `default_color`。
    Monochrome,
}

impl ColorMode {
    /// 从外部字符串解析颜色模式。
    ///
    /// # 示例
    /// ```
    /// use dot_svg::dot_svg::ColorMode;
    ///
    /// let mode = ColorMode::from_str(" Monochrome ")?;
    /// assert_eq!(mode.as_str(), "monochrome");
    /// # Ok::<(), dot_svg::dot_svg::ConversionError>(())
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(mode: &str) -> Result<Self, ConversionError> {
        match mode.trim().to_lowercase().as_str() {
            "sampled" => Ok(Self::Sampled),
            "monochrome" => Ok(Self::Monochrome),
            other => Err(ConversionError::InvalidConfig(format!(
                "未知颜色模式：{}（可选：sampled / monochrome）",
                other
            ))),
        }
    }

    /// 将模式输出为稳定字符串，供日志与配置文件使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sampled => "sampled",
            Self::Monochrome => "monochrome",
        }
    }
}

/// 单次转换配置。
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// 圆点半径（SVG 用户单位）。
    pub dot_size: f64,
    /// 采样步长（像素），同时作用于水平与垂直方向。
    pub spacing: u32,
    /// 默认填充色，仅在 `ColorMode::Monochrome` 下生效。
    pub default_color: String,
    /// 颜色来源。
    pub color_mode: ColorMode,
    /// 解码前按图片头信息检查的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dot_size: 1.5,
            spacing: 6,
            default_color: "white".to_string(),
            color_mode: ColorMode::Sampled,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl ConversionConfig {
    /// 校验参数合法性。
    pub fn validate(&self) -> Result<(), ConversionError> {
        if !self.dot_size.is_finite() || self.dot_size <= 0.0 {
            return Err(ConversionError::InvalidConfig(format!(
                "dot_size 必须为正数：{}",
                self.dot_size
            )));
        }
        if self.spacing == 0 {
            return Err(ConversionError::InvalidConfig("spacing 不能小于 1".to_string()));
        }
        // Sampled 模式下 default_color 不参与输出，原样接受
        if self.color_mode == ColorMode::Monochrome && !is_valid_fill(&self.default_color) {
            return Err(ConversionError::InvalidConfig(format!(
                "default_color 不是合法颜色：{}",
                self.default_color
            )));
        }
        if self.max_decoded_pixels == 0 {
            return Err(ConversionError::InvalidConfig(
                "max_decoded_pixels 不能为 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// 判断字符串能否作为 SVG `fill` 属性值。
pub fn is_valid_fill(color: &str) -> bool {
    FILL_PATTERN.is_match(color)
}

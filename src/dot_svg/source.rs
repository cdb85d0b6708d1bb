//! # 中间模型
//!
//! ## 设计思路
//!
//! 将“采样结果”和“文本输出”解耦：
//! - `DotCircle` 表示一个采样单元对应的圆点
//! - `SvgDocument` 按顺序持有圆点，尺寸始终等于源图像素尺寸
//!
//! 文本化只在 `render` 中进行一次，采样阶段不拼接字符串。

use std::fmt::Write;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// 单个圆点。
#[derive(Debug, Clone, PartialEq)]
pub struct DotCircle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    /// `#rrggbb` 或配置中的默认颜色。
    pub fill: String,
    /// `alpha / 255`，输出时保留两位小数。
    pub opacity: f64,
}

/// 点阵 SVG 文档。
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    pub width: u32,
    pub height: u32,
    pub circles: Vec<DotCircle>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            circles: Vec::new(),
        }
    }

    pub fn push(&mut self, circle: DotCircle) {
        self.circles.push(circle);
    }

    /// 输出完整 SVG 文本。
    ///
    /// 行之间以 `\n` 连接，末尾不带换行；相同文档总是得到逐字节相同的结果。
    pub fn render(&self) -> String {
        // 每个 circle 行大约 70 字节
        let mut out = String::with_capacity(128 + self.circles.len() * 72);
        let _ = write!(
            out,
            r#"<svg xmlns="{}" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            SVG_NAMESPACE, self.width, self.height, self.width, self.height
        );

        for circle in &self.circles {
            let _ = write!(
                out,
                "\n  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" opacity=\"{:.2}\" />",
                format_number(circle.cx),
                format_number(circle.cy),
                format_number(circle.r),
                circle.fill,
                circle.opacity
            );
        }

        out.push_str("\n</svg>");
        out
    }
}

/// 最短往返十进制表示；整数值保留一位小数（`3.0`）。
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// 将 RGB 编码为小写 `#rrggbb`。
pub(crate) fn hex_color(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

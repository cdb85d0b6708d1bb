//! # 点阵 SVG 转换模块（dot_svg）
//!
//! ## 设计思路
//!
//! 将“加载校验 → 步长采样 → 文本输出 → 写入文件”按职责拆分为多个子模块：
//!
//! - `config`：转换参数、颜色模式与校验
//! - `error`：转换与批处理错误
//! - `loader`：header 尺寸检查 + 解码为 RGBA
//! - `sampler`：纯函数采样，生成 `SvgDocument`
//! - `source`：圆点与文档模型、SVG 文本化
//! - `converter`：编排整条链路 + 阶段耗时日志
//!
//! ## 调用链
//!
//! ```text
//! batch::run_batch（每个 PNG 一次）
//!    ↓
//! converter.rs（校验配置 + 编排）
//!    ├─ loader.rs（尺寸检查 + 解码）
//!    ├─ sampler.rs（步长采样 → SvgDocument）
//!    └─ source.rs（render → String）
//!    ↓
//! std::fs::write（覆盖输出）
//! ```

mod config;
mod converter;
mod error;
mod loader;
mod sampler;
mod source;

pub use config::{is_valid_fill, ColorMode, ConversionConfig, VISIBILITY_THRESHOLD};
pub use converter::{convert, convert_to_dot_svg};
pub use error::{BatchError, ConversionError};
pub use sampler::render_dot_svg;
pub use source::{DotCircle, SvgDocument};

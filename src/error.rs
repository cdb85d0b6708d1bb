//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义顶层 `AppError`，汇总转换、批处理、设置读取等各层错误，
//! 供 `main` 与设置模块统一处理。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为各层错误提供 `From` 转换，调用侧直接使用 `?`。

use crate::dot_svg::{BatchError, ConversionError};

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 单个文件转换失败
    #[error("{0}")]
    Conversion(#[from] ConversionError),

    /// 批处理目录级错误
    #[error("{0}")]
    Batch(#[from] BatchError),

    /// 设置文件无法解析
    #[error("设置错误: {0}")]
    Settings(String),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

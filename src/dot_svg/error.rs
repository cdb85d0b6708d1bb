//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 单次转换与批量驱动各用一个错误枚举，调用侧可按分支匹配：
//! 单个文件失败只记录日志，目录级错误结束本次批处理。

use std::path::PathBuf;

/// 单次转换错误。
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("配置错误：{0}")]
    InvalidConfig(String),

    #[error("无法加载图片 {}：{source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("写入 SVG 失败 {}：{source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 批量驱动错误。
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// 输入目录不存在。
    #[error("目录不存在：{}", .0.display())]
    DirectoryMissing(PathBuf),

    /// 目录存在但没有 PNG 文件。
    #[error("目录中没有 PNG 文件：{}", .0.display())]
    NoInputFiles(PathBuf),

    #[error("读取目录失败：{0}")]
    Io(#[from] std::io::Error),
}

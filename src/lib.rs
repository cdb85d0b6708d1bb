//! # 点阵 SVG 转换工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs  env_logger 初始化 → 读取设置 → 批处理           │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ settings ──── dot-svg.json（可选，serde_json）        │
//! │  ├─ batch ─────── 枚举 *.png，逐个转换，汇总报告          │
//! │  ├─ dot_svg ───── 加载 · 步长采样 · SVG 输出              │
//! │  └─ error ─────── AppError（统一错误类型）                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError` |
//! | [`dot_svg`] | 单张图片 → 点阵 SVG 的完整链路 |
//! | [`batch`] | 目录级批处理与结果报告 |
//! | [`settings`] | 可选设置文件的读取与默认值回退 |

pub mod error;
pub mod batch;
pub mod dot_svg;
pub mod settings;

//! # 点阵 SVG 转换工具 — 应用入口
//!
//! 无命令行参数：处理 `./src` 下全部 PNG，生成同名 SVG。
//! 目录缺失、没有输入文件或单个文件失败都只记录日志，进程正常退出。

use std::path::Path;

use dot_svg::batch;
use dot_svg::dot_svg::BatchError;
use dot_svg::error::AppError;
use dot_svg::settings;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = settings::load_batch_config(Path::new(settings::SETTINGS_FILE));

    match batch::run(&config) {
        Ok(_) => {}
        Err(AppError::Batch(
            err @ (BatchError::DirectoryMissing(_) | BatchError::NoInputFiles(_)),
        )) => {
            log::info!("📭 {err}，无需转换");
        }
        Err(AppError::Conversion(err)) => {
            log::error!("参数无效，未执行转换: {err}");
        }
        Err(err) => {
            log::error!("批处理失败: {err}");
        }
    }
}

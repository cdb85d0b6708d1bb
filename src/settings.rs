use std::fs;
use std::path::Path;

use crate::batch::BatchConfig;
use crate::error::AppError;

/// 工作目录下的可选配置文件名。
pub const SETTINGS_FILE: &str = "dot-svg.json";

/// 读取配置文件；文件不存在时返回 `Ok(None)`。
pub fn read_batch_config(path: &Path) -> Result<Option<BatchConfig>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let parsed = serde_json::from_str::<BatchConfig>(&content)
        .map_err(|e| AppError::Settings(format!("解析设置文件失败: {}", e)))?;

    Ok(Some(parsed))
}

/// 读取配置文件，失败时回退为默认配置。
pub fn load_batch_config(path: &Path) -> BatchConfig {
    match read_batch_config(path) {
        Ok(Some(config)) => {
            log::info!("⚙️ 已加载设置文件 {}", path.display());
            config
        }
        Ok(None) => BatchConfig::default(),
        Err(err) => {
            log::warn!("设置文件不可用，使用默认参数: {err}");
            BatchConfig::default()
        }
    }
}

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::DecayRates;

/// 状态条变色阈值（低于 critical 为红，低于 warning 为橙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub critical: u8,
    pub warning: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            critical: 25,
            warning: 50,
        }
    }
}

/// TOML配置文件结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pet_name: String,
    pub notification_ms: u64,
    pub tick_ms: u64,
    pub thresholds: Thresholds,
    pub decay: DecayRates,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pet_name: "Bitzy".to_string(),
            notification_ms: 3000,
            tick_ms: 250,
            thresholds: Thresholds::default(),
            decay: DecayRates::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms.max(1))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    /// 修正无效的阈值，返回是否回退到了默认值
    ///
    /// 在日志初始化之后调用，回退才会写进日志
    pub fn sanitize(&mut self) -> bool {
        if self.thresholds.critical <= self.thresholds.warning {
            return false;
        }
        log::warn!(
            "critical threshold {} above warning threshold {}, using defaults",
            self.thresholds.critical,
            self.thresholds.warning
        );
        self.thresholds = Thresholds::default();
        true
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;

    Ok(settings)
}

//! 全局配置管理,存储所有可配置项

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BfResult, BotFilterError};
use crate::filter::{FactionTable, LeetTable, SpoilerTier};

/// 全局配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    // 默认数据集路径
    pub default_catalog_path: PathBuf,
    // 备选数据集路径
    pub alternate_catalog_path: PathBuf,
    // 解析后图鉴的缓存目录（None 表示不缓存）
    pub cache_dir: Option<PathBuf>,
    // leetspeak 替换表
    pub leet_table: LeetTable,
    // 阵营按钮表
    pub factions: FactionTable,
    // 控件未给出剧透等级时使用
    pub default_spoiler_tier: SpoilerTier,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_catalog_path: PathBuf::from("json/bots.json"),
            alternate_catalog_path: PathBuf::from("json/bots_b11.json"),
            cache_dir: None,
            leet_table: LeetTable::default(),
            factions: FactionTable::default(),
            default_spoiler_tier: SpoilerTier::None,
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从 JSON 文件加载配置，缺失的字段使用默认值
    pub fn load_from_file(path: &Path) -> BfResult<GlobalConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BotFilterError::ConfigError(format!("读取{}失败：{}", path.display(), e)))?;
        let config: GlobalConfig = serde_json::from_str(&content)
            .map_err(|e| BotFilterError::ConfigError(format!("解析{}失败：{}", path.display(), e)))?;

        debug!("配置文件加载成功：{}", path.display());
        Ok(config)
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    /// 在已有配置基础上继续修改
    pub fn from_config(config: GlobalConfig) -> Self {
        Self { config }
    }

    pub fn default_catalog_path(mut self, path: PathBuf) -> Self {
        self.config.default_catalog_path = path;
        self
    }

    pub fn alternate_catalog_path(mut self, path: PathBuf) -> Self {
        self.config.alternate_catalog_path = path;
        self
    }

    pub fn cache_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config.cache_dir = dir;
        self
    }

    pub fn leet_table(mut self, table: LeetTable) -> Self {
        self.config.leet_table = table;
        self
    }

    pub fn factions(mut self, factions: FactionTable) -> Self {
        self.config.factions = factions;
        self
    }

    pub fn default_spoiler_tier(mut self, tier: SpoilerTier) -> Self {
        self.config.default_spoiler_tier = tier;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

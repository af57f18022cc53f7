//! rsbotfilter - Cogmind 机器人图鉴过滤引擎

// 导出全局错误类型
pub use self::error::{BotFilterError, BfResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出图鉴模块核心接口
pub use self::catalog::{
    BotPart, BotRecord, Catalog, DatasetVariant,
    CatalogLoader, CatalogSet, CatalogCacheManager
};

// 导出过滤模块核心接口
pub use self::filter::{
    FilterControls, FilterState, SpoilerTier, FactionEntry, FactionTable, LeetTable,
    BotFilter, FilterRule, filter_and_sort, locale_compare, sort_bot_names, sort_bots
};

// 导出浏览模块核心接口
pub use self::browser::{BotBrowser, BotGrid, GridView, BotPage};

// 导出工具模块核心接口
pub use self::utils::{name_to_id, preview_names};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod catalog;
pub mod filter;
pub mod browser;
pub mod utils;

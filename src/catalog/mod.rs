//! 图鉴模块：负责图鉴的数据模型定义、加载与缓存
pub mod model;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{BotPart, BotRecord, Catalog, DatasetVariant};
pub use self::loader::{CatalogLoader, CatalogSet};
pub use self::cache::CatalogCacheManager;

//! 图鉴加载管理器
//! 负责从本地缓存或 JSON 数据文件加载图鉴

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::cache::CatalogCacheManager;
use super::model::{Catalog, DatasetVariant};
use crate::config::GlobalConfig;
use crate::error::{BfResult, BotFilterError};

/// 两个数据集版本的图鉴
#[derive(Debug, Clone)]
pub struct CatalogSet {
    default: Arc<Catalog>,
    alternate: Arc<Catalog>,
}

impl CatalogSet {
    pub fn new(default: Catalog, alternate: Catalog) -> BfResult<Self> {
        if default.variant() != DatasetVariant::Default || alternate.variant() != DatasetVariant::Alternate {
            return Err(BotFilterError::InvalidInput(format!(
                "图鉴版本错位：{} / {}",
                default.variant().as_str(),
                alternate.variant().as_str()
            )));
        }
        Ok(Self {
            default: Arc::new(default),
            alternate: Arc::new(alternate),
        })
    }

    /// 取出指定版本（整体共享，不做拷贝）
    pub fn get(&self, variant: DatasetVariant) -> Arc<Catalog> {
        match variant {
            DatasetVariant::Default => Arc::clone(&self.default),
            DatasetVariant::Alternate => Arc::clone(&self.alternate),
        }
    }
}

/// 图鉴加载管理器
pub struct CatalogLoader;

impl CatalogLoader {
    /// 加载单个版本（优先使用未过期的本地缓存）
    pub async fn load(config: &GlobalConfig, variant: DatasetVariant) -> BfResult<Catalog> {
        let source = match variant {
            DatasetVariant::Default => &config.default_catalog_path,
            DatasetVariant::Alternate => &config.alternate_catalog_path,
        };

        // 1. 优先加载本地缓存
        if config.cache_dir.is_some() {
            match CatalogCacheManager::load_from_cache(config, variant, source).await {
                Ok(catalog) => {
                    debug!("从本地缓存加载图鉴成功：{}", variant.as_str());
                    return Ok(catalog);
                }
                Err(e) => debug!("本地缓存不可用，将重新解析数据文件：{}", e),
            }
        }

        // 2. 解析 JSON 数据文件
        let catalog = Self::load_json(source, variant).await?;

        // 3. 缓存到本地
        if config.cache_dir.is_some() {
            if let Err(e) = CatalogCacheManager::save_to_cache(config, &catalog, source).await {
                warn!("图鉴缓存到本地失败：{}", e);
            } else {
                debug!("图鉴已缓存到本地：{}", variant.as_str());
            }
        }

        Ok(catalog)
    }

    /// 直接解析 JSON 数据文件
    pub async fn load_json(path: &Path, variant: DatasetVariant) -> BfResult<Catalog> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            BotFilterError::CatalogLoadError(format!("读取{}失败：{}", path.display(), e))
        })?;

        let catalog = Catalog::from_json_str(variant, &content)?;
        info!("图鉴加载完成：{}（{}），条目数：{}", variant.as_str(), path.display(), catalog.len());
        Ok(catalog)
    }

    /// 同时加载两个版本
    pub async fn load_all(config: &GlobalConfig) -> BfResult<CatalogSet> {
        let (default, alternate) = tokio::try_join!(
            Self::load(config, DatasetVariant::Default),
            Self::load(config, DatasetVariant::Alternate),
        )?;
        CatalogSet::new(default, alternate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    const DEFAULT_JSON: &str = r#"{"Grunt": {"class": "Grunt"}, "Sentry": {"class": "Sentry"}}"#;
    const ALTERNATE_JSON: &str = r#"[{"name": "Grunt", "class": "Grunt", "categories": ["0b10"]}]"#;

    #[tokio::test]
    async fn test_load_all_and_cache() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("bots.json");
        let alternate_path = dir.path().join("bots_b11.json");
        std::fs::write(&default_path, DEFAULT_JSON).unwrap();
        std::fs::write(&alternate_path, ALTERNATE_JSON).unwrap();

        let config = ConfigManager::custom()
            .default_catalog_path(default_path)
            .alternate_catalog_path(alternate_path)
            .cache_dir(Some(dir.path().join("cache")))
            .build();

        let set = CatalogLoader::load_all(&config).await.unwrap();
        assert_eq!(set.get(DatasetVariant::Default).len(), 2);
        let alternate = set.get(DatasetVariant::Alternate);
        assert_eq!(alternate.len(), 1);
        assert!(alternate.get("Grunt").unwrap().has_category("0b10"));

        // 两个版本都已写入缓存
        for variant in [DatasetVariant::Default, DatasetVariant::Alternate] {
            let path = CatalogCacheManager::cache_path(&config, variant).unwrap();
            assert!(path.exists());
        }

        // 第二次加载命中缓存，结果一致
        let cached = CatalogLoader::load(&config, DatasetVariant::Default).await.unwrap();
        assert_eq!(&cached, set.get(DatasetVariant::Default).as_ref());
    }

    #[tokio::test]
    async fn test_cache_does_not_outlive_source_change() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("bots.json");
        let other = dir.path().join("other.json");
        std::fs::write(&first, r#"{"Grunt": {"class": "Grunt"}}"#).unwrap();
        std::fs::write(&other, r#"{"Other": {"class": "Other"}}"#).unwrap();

        // 新数据源比缓存旧
        let old = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        std::fs::File::options().write(true).open(&other).unwrap().set_modified(old).unwrap();

        let cache_dir = Some(dir.path().join("cache"));
        let config = ConfigManager::custom()
            .default_catalog_path(first)
            .cache_dir(cache_dir.clone())
            .build();
        let catalog = CatalogLoader::load(&config, DatasetVariant::Default).await.unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Grunt"]);

        let config = ConfigManager::custom()
            .default_catalog_path(other)
            .cache_dir(cache_dir)
            .build();
        let catalog = CatalogLoader::load(&config, DatasetVariant::Default).await.unwrap();
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Other"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let config = ConfigManager::custom()
            .default_catalog_path("/nonexistent/bots.json".into())
            .build();
        let result = CatalogLoader::load(&config, DatasetVariant::Default).await;
        assert!(matches!(result, Err(BotFilterError::CatalogLoadError(_))));
    }

    #[test]
    fn test_catalog_set_rejects_swapped_variants() {
        let a = Catalog::new(DatasetVariant::Alternate, Vec::new());
        let b = Catalog::new(DatasetVariant::Default, Vec::new());
        assert!(CatalogSet::new(a, b).is_err());
    }
}

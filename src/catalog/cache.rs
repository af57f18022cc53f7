//! 图鉴缓存管理
//! 仅处理解析后图鉴的本地序列化（MessagePack）和反序列化
//! 快照中记录数据源的路径、大小与修改时间，任一不一致即视为过期

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use rmp_serde::{Serializer, from_slice};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{Catalog, DatasetVariant};
use crate::config::GlobalConfig;
use crate::error::{BfResult, BotFilterError};

/// 数据源标识
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStamp {
    pub path: PathBuf,
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl SourceStamp {
    /// 读取数据源当前的标识
    pub async fn read(path: &Path) -> BfResult<Self> {
        let meta = tokio::fs::metadata(path).await?;
        Ok(Self {
            path: path.to_path_buf(),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

/// 缓存文件内容
#[derive(Debug, Serialize, Deserialize)]
struct CatalogSnapshot {
    source: SourceStamp,
    catalog: Catalog,
}

/// 图鉴缓存管理器
pub struct CatalogCacheManager;

impl CatalogCacheManager {
    /// 缓存文件路径，未配置缓存目录时返回 None
    pub fn cache_path(config: &GlobalConfig, variant: DatasetVariant) -> Option<PathBuf> {
        config
            .cache_dir
            .as_ref()
            .map(|dir| dir.join(format!("bots_{}.mp", variant.as_str())))
    }

    fn require_path(config: &GlobalConfig, variant: DatasetVariant) -> BfResult<PathBuf> {
        Self::cache_path(config, variant)
            .ok_or_else(|| BotFilterError::CatalogCacheError("未配置缓存目录".to_string()))
    }

    /// 从本地缓存加载图鉴，缓存必须对应 `source` 的当前内容
    pub async fn load_from_cache(
        config: &GlobalConfig,
        variant: DatasetVariant,
        source: &Path,
    ) -> BfResult<Catalog> {
        let cache_path = Self::require_path(config, variant)?;
        let cache_data = tokio::fs::read(&cache_path).await?;

        // MessagePack反序列化
        let snapshot: CatalogSnapshot = from_slice(&cache_data)
            .map_err(|e| BotFilterError::MsgPackError(format!("反序列化失败：{}", e)))?;

        if snapshot.catalog.variant() != variant {
            return Err(BotFilterError::CatalogCacheError(format!(
                "缓存版本不一致：期望{}，实际{}",
                variant.as_str(),
                snapshot.catalog.variant().as_str()
            )));
        }

        let stale = match SourceStamp::read(source).await {
            Ok(current) => current != snapshot.source,
            // 数据源不可读时，只要路径一致仍可使用缓存
            Err(_) => snapshot.source.path != source,
        };
        if stale {
            return Err(BotFilterError::CatalogCacheError(format!(
                "缓存已过期：{} 对应 {}",
                cache_path.display(),
                snapshot.source.path.display()
            )));
        }

        debug!("缓存文件反序列化成功：{}，条目数：{}", cache_path.display(), snapshot.catalog.len());
        Ok(snapshot.catalog)
    }

    /// 将图鉴连同数据源标识缓存到本地
    pub async fn save_to_cache(config: &GlobalConfig, catalog: &Catalog, source: &Path) -> BfResult<()> {
        let cache_path = Self::require_path(config, catalog.variant())?;
        let snapshot = CatalogSnapshot {
            source: SourceStamp::read(source).await?,
            catalog: catalog.clone(),
        };
        let mut cache_data = Vec::new();

        // MessagePack序列化
        snapshot.serialize(&mut Serializer::new(&mut cache_data))
            .map_err(|e| BotFilterError::MsgPackError(format!("序列化失败：{}", e)))?;

        debug!("图鉴序列化成功，序列化后数据大小：{} 字节", cache_data.len());

        if let Some(dir) = cache_path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&cache_path, cache_data).await?;
        Ok(())
    }

    /// 清除本地缓存
    pub async fn clear_cache(config: &GlobalConfig) -> BfResult<()> {
        for variant in [DatasetVariant::Default, DatasetVariant::Alternate] {
            if let Some(cache_path) = Self::cache_path(config, variant) {
                if cache_path.exists() {
                    tokio::fs::remove_file(cache_path).await?;
                }
            }
        }
        Ok(())
    }
}

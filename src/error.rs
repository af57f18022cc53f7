//! 全局错误类型定义
//! 过滤核心本身不会失败，错误只出现在数据加载与配置边界

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum BotFilterError {
    // 图鉴相关错误
    #[error("图鉴加载失败：{0}")]
    CatalogLoadError(String),
    #[error("图鉴解析失败：{0}")]
    CatalogParseError(String),
    #[error("图鉴缓存失败：{0}")]
    CatalogCacheError(String),

    // 配置相关错误
    #[error("配置加载失败：{0}")]
    ConfigError(String),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("MessagePack序列化/反序列化失败：{0}")]
    MsgPackError(String),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type BfResult<T> = Result<T, BotFilterError>;

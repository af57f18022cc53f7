//! 工具模块：元素ID转换、日志预览
pub mod name_id;
pub mod log_format;

pub use self::name_id::name_to_id;
pub use self::log_format::preview_names;

//! 浏览模块：数据集切换、过滤求值与显示顺序
pub mod browser;
pub mod grid;
pub mod page;

// 导出核心接口
pub use self::browser::BotBrowser;
pub use self::grid::{BotGrid, GridView};
pub use self::page::BotPage;

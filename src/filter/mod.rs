//! 过滤模块：过滤状态、leetspeak 归一化、组合谓词与排序
pub mod state;
pub mod faction;
pub mod leet;
pub mod predicate;
pub mod sort;

// 导出核心接口
pub use self::state::{FilterControls, FilterState, SpoilerTier, SPOILERS_TAG, REDACTED_TAG};
pub use self::faction::{FactionEntry, FactionTable};
pub use self::leet::LeetTable;
pub use self::predicate::{BotFilter, FilterRule, filter_and_sort};
pub use self::sort::{locale_compare, sort_bot_names, sort_bots};

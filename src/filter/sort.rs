//! 本地化名称排序
//! 基于 Unicode 排序算法（CLDR root），标点参与比较，小写在前，
//! 与浏览器 localeCompare 的默认行为一致，而不是按码点排序

use std::cmp::Ordering;
use feruca::{Collator, Locale, Tailoring};

use crate::catalog::model::BotRecord;

/// root 排序器：标点不可忽略，完全相等时按字节兜底保证全序
fn root_collator() -> Collator {
    Collator::new(Tailoring::Cldr(Locale::Root), false, true)
}

/// 两个名称的本地化比较
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    root_collator().collate(a, b)
}

/// 按名称排序名称列表（稳定排序）
pub fn sort_bot_names<S: AsRef<str>>(names: &mut [S]) {
    let mut collator = root_collator();
    names.sort_by(|a, b| collator.collate(a.as_ref(), b.as_ref()));
}

/// 按名称排序条目
pub fn sort_bots(bots: &mut [&BotRecord]) {
    let mut collator = root_collator();
    bots.sort_by(|a, b| collator.collate(a.name.as_str(), b.name.as_str()));
}

//! 组合过滤器
//! 将过滤状态中各个独立的条件组合为一个谓词（所有条件同时满足才算匹配）

use tracing::debug;

use super::leet::LeetTable;
use super::sort::sort_bots;
use super::state::{FilterState, SpoilerTier};
use crate::catalog::model::{BotPart, BotRecord, Catalog};

/// 单个过滤条件
#[derive(Debug, Clone)]
pub enum FilterRule<'a> {
    /// 剧透等级
    Spoiler(SpoilerTier),
    /// 名称：普通子串；查询长度 > 1 时额外尝试 leetspeak 归一化后的名称
    Name {
        query: &'a str,
        leet: Option<&'a LeetTable>,
    },
    /// 类别子串
    Class(&'a str),
    /// 部件子串（直接部件 + 备选部件组）
    Part(&'a str),
    /// 阵营标签
    Faction(&'a str),
}

impl<'a> FilterRule<'a> {
    pub fn matches(&self, bot: &BotRecord) -> bool {
        match self {
            FilterRule::Spoiler(tier) => tier.allows(&bot.categories),
            FilterRule::Name { query, leet } => {
                let lower_name = bot.name.to_lowercase();
                if lower_name.contains(query) {
                    return true;
                }
                leet.is_some_and(|table| table.transform(&lower_name).contains(query))
            }
            FilterRule::Class(query) => bot.class.to_lowercase().contains(query),
            FilterRule::Part(query) => {
                part_names_contain(bot.primary_parts(), query)
                    || bot
                        .alternate_part_groups()
                        .any(|group| part_names_contain(group.iter(), query))
            }
            FilterRule::Faction(tag) => bot.has_category(tag),
        }
    }
}

fn part_names_contain<'p>(mut parts: impl Iterator<Item = &'p BotPart>, query: &str) -> bool {
    parts.any(|part| part.name.to_lowercase().contains(query))
}

/// 组合过滤器
#[derive(Debug, Clone, Default)]
pub struct BotFilter<'a> {
    rules: Vec<FilterRule<'a>>,
}

impl<'a> BotFilter<'a> {
    /// 根据过滤状态构造，空查询不产生条件
    pub fn build(state: &'a FilterState, leet: &'a LeetTable) -> Self {
        let mut rules = Vec::new();

        if state.spoiler_tier() != SpoilerTier::Redacted {
            rules.push(FilterRule::Spoiler(state.spoiler_tier()));
        }

        // 单个字符的 leetspeak 替换误报太多，至少两个字符才启用
        let name = state.name_query();
        match name.chars().count() {
            0 => {}
            1 => rules.push(FilterRule::Name { query: name, leet: None }),
            _ => rules.push(FilterRule::Name { query: name, leet: Some(leet) }),
        }

        if !state.class_query().is_empty() {
            rules.push(FilterRule::Class(state.class_query()));
        }

        if !state.part_query().is_empty() {
            rules.push(FilterRule::Part(state.part_query()));
        }

        if let Some(tag) = state.faction_tag() {
            rules.push(FilterRule::Faction(tag));
        }

        Self { rules }
    }

    pub fn rules(&self) -> &[FilterRule<'a>] {
        &self.rules
    }

    pub fn is_unconstrained(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn matches(&self, bot: &BotRecord) -> bool {
        self.rules.iter().all(|rule| rule.matches(bot))
    }

    /// 按图鉴顺序收集匹配条目
    pub fn apply<'c>(&self, catalog: &'c Catalog) -> Vec<&'c BotRecord> {
        if self.is_unconstrained() {
            return catalog.iter().collect();
        }
        catalog.iter().filter(|bot| self.matches(bot)).collect()
    }
}

/// 完整的一次过滤 + 排序
pub fn filter_and_sort<'c>(
    catalog: &'c Catalog,
    state: &FilterState,
    leet: &LeetTable,
) -> Vec<&'c BotRecord> {
    let filter = BotFilter::build(state, leet);
    let mut matched = filter.apply(catalog);
    sort_bots(&mut matched);

    debug!(
        "过滤完成：{}（{}条条件），匹配 {}/{}",
        catalog.variant().as_str(),
        filter.rules().len(),
        matched.len(),
        catalog.len()
    );
    matched
}

//! 图鉴浏览器：持有当前数据集版本，对外提供纯函数式的过滤 + 排序

use std::sync::Arc;
use tracing::info;

use crate::catalog::{BotRecord, Catalog, CatalogSet, DatasetVariant};
use crate::config::GlobalConfig;
use crate::filter::{FactionTable, FilterControls, FilterState, LeetTable, SpoilerTier, filter_and_sort};

/// 图鉴浏览器
#[derive(Debug, Clone)]
pub struct BotBrowser {
    catalogs: CatalogSet,
    current: Arc<Catalog>,
    leet: LeetTable,
    factions: FactionTable,
    default_tier: SpoilerTier,
}

impl BotBrowser {
    pub fn new(config: &GlobalConfig, catalogs: CatalogSet, variant: DatasetVariant) -> Self {
        let current = catalogs.get(variant);
        Self {
            catalogs,
            current,
            leet: config.leet_table.clone(),
            factions: config.factions.clone(),
            default_tier: config.default_spoiler_tier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.current
    }

    pub fn variant(&self) -> DatasetVariant {
        self.current.variant()
    }

    pub fn factions(&self) -> &FactionTable {
        &self.factions
    }

    /// 整体替换当前图鉴，返回版本是否发生变化
    pub fn switch_variant(&mut self, variant: DatasetVariant) -> bool {
        if self.variant() == variant {
            return false;
        }
        self.current = self.catalogs.get(variant);
        info!("切换数据集：{}，条目数：{}", variant.as_str(), self.current.len());
        true
    }

    /// 由控件值构造本次求值的过滤状态
    pub fn filter_state(&self, controls: &FilterControls) -> FilterState {
        FilterState::from_controls(controls, &self.factions, self.default_tier)
    }

    /// 过滤并排序后的条目
    pub fn visible_bots(&self, state: &FilterState) -> Vec<&BotRecord> {
        filter_and_sort(&self.current, state, &self.leet)
    }

    /// 过滤并排序后的名称
    pub fn visible_names(&self, state: &FilterState) -> Vec<String> {
        self.visible_bots(state)
            .into_iter()
            .map(|bot| bot.name.clone())
            .collect()
    }

    /// 决定阵营按钮可见性的剧透等级
    /// 与过滤不同，无法识别的文本按 None 处理（隐藏剧透/机密阵营）
    pub fn faction_tier(&self, controls: &FilterControls) -> SpoilerTier {
        match controls.spoilers.as_deref() {
            None => self.default_tier,
            Some(raw) => SpoilerTier::parse(raw).unwrap_or(SpoilerTier::None),
        }
    }

    /// 当前剧透等级下应显示的阵营按钮
    pub fn visible_faction_ids(&self, tier: SpoilerTier) -> Vec<&str> {
        self.factions.visible_ids(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;

    fn catalogs() -> CatalogSet {
        let default = Catalog::new(
            DatasetVariant::Default,
            vec![
                BotRecord::new("Zeta", "Grunt"),
                BotRecord::new("alpha", "Grunt"),
                BotRecord::new("Beta", "Sentry"),
                BotRecord::new("Shared", "Old"),
            ],
        );
        let alternate = Catalog::new(
            DatasetVariant::Alternate,
            vec![
                BotRecord::new("Shared", "New"),
                BotRecord::new("Gamma", "Grunt").with_categories(&["Spoilers"]),
            ],
        );
        CatalogSet::new(default, alternate).unwrap()
    }

    #[test]
    fn test_visible_names_sorted() {
        let browser = BotBrowser::new(&ConfigManager::get_default(), catalogs(), DatasetVariant::Default);
        let state = FilterState::default();
        assert_eq!(browser.visible_names(&state), vec!["alpha", "Beta", "Shared", "Zeta"]);
    }

    #[test]
    fn test_switch_variant_replaces_catalog() {
        let mut browser = BotBrowser::new(&ConfigManager::get_default(), catalogs(), DatasetVariant::Default);
        assert!(!browser.switch_variant(DatasetVariant::Default));
        assert!(browser.switch_variant(DatasetVariant::Alternate));

        let state = FilterState::default();
        assert_eq!(browser.visible_names(&state), vec!["Gamma", "Shared"]);

        // 同名条目来自新版本
        let bots = browser.visible_bots(&state);
        let shared = bots.iter().find(|b| b.name == "Shared").unwrap();
        assert_eq!(shared.class, "New");
        assert!(bots.iter().all(|b| b.name != "alpha"));
    }

    #[test]
    fn test_filter_state_uses_config_default_tier() {
        let mut browser = BotBrowser::new(&ConfigManager::get_default(), catalogs(), DatasetVariant::Alternate);
        let state = browser.filter_state(&FilterControls::default());
        assert_eq!(state.spoiler_tier(), SpoilerTier::None);
        assert_eq!(browser.visible_names(&state), vec!["Shared"]);

        browser.switch_variant(DatasetVariant::Default);
        assert_eq!(browser.visible_faction_ids(SpoilerTier::None).len(), 3);
    }

    #[test]
    fn test_unknown_spoiler_text_hides_spoiler_factions() {
        let browser = BotBrowser::new(&ConfigManager::get_default(), catalogs(), DatasetVariant::Alternate);
        let controls = FilterControls {
            spoilers: Some("???".to_string()),
            ..Default::default()
        };

        // 过滤不受限制，但按钮按 None 显示
        let state = browser.filter_state(&controls);
        assert_eq!(browser.visible_names(&state), vec!["Gamma", "Shared"]);
        assert_eq!(browser.faction_tier(&controls), SpoilerTier::None);

        let controls = FilterControls {
            spoilers: Some("Redacted".to_string()),
            ..Default::default()
        };
        assert_eq!(browser.faction_tier(&controls), SpoilerTier::Redacted);
        assert_eq!(browser.faction_tier(&FilterControls::default()), SpoilerTier::None);
    }
}

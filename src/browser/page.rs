//! 机器人页面控制器
//! 接收控件事件（输入、下拉、按钮、复选框），同步重新过滤并给出显示顺序

use tracing::debug;

use super::browser::BotBrowser;
use super::grid::{BotGrid, GridView};
use crate::catalog::{BotRecord, DatasetVariant};
use crate::filter::{FilterControls, SpoilerTier};
use crate::utils::{name_to_id, preview_names};

type HandleFactory<H> = Box<dyn FnMut(&BotRecord) -> H>;

/// 页面控制器
pub struct BotPage<H> {
    browser: BotBrowser,
    controls: FilterControls,
    grid: BotGrid<H>,
    factory: HandleFactory<H>,
    visible: Vec<String>,
}

impl BotPage<String> {
    /// 以元素ID作为句柄
    pub fn with_id_handles(browser: BotBrowser, spoilers: Option<String>) -> Self {
        Self::new(browser, spoilers, |bot| name_to_id(&bot.name))
    }
}

impl<H> BotPage<H> {
    pub fn new<F>(browser: BotBrowser, spoilers: Option<String>, factory: F) -> Self
    where
        F: FnMut(&BotRecord) -> H + 'static,
    {
        let mut factory: HandleFactory<H> = Box::new(factory);
        let grid = BotGrid::build(browser.catalog(), &mut factory);
        let mut page = Self {
            browser,
            controls: FilterControls {
                spoilers,
                ..Default::default()
            },
            grid,
            factory,
            visible: Vec::new(),
        };
        page.refresh();
        page
    }

    pub fn browser(&self) -> &BotBrowser {
        &self.browser
    }

    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }

    pub fn visible_names(&self) -> &[String] {
        &self.visible
    }

    pub fn grid_view(&self) -> GridView<'_, H> {
        self.grid.apply(&self.visible)
    }

    pub fn spoiler_tier(&self) -> SpoilerTier {
        self.browser.filter_state(&self.controls).spoiler_tier()
    }

    /// 当前剧透等级下可见的阵营按钮
    pub fn visible_faction_ids(&self) -> Vec<&str> {
        self.browser
            .visible_faction_ids(self.browser.faction_tier(&self.controls))
    }

    pub fn set_name(&mut self, value: &str) -> &[String] {
        self.controls.name = value.to_string();
        self.refresh()
    }

    pub fn set_class(&mut self, value: &str) -> &[String] {
        self.controls.class = value.to_string();
        self.refresh()
    }

    pub fn set_part(&mut self, value: &str) -> &[String] {
        self.controls.part = value.to_string();
        self.refresh()
    }

    pub fn set_spoilers(&mut self, value: &str) -> &[String] {
        self.controls.spoilers = Some(value.to_string());
        self.refresh()
    }

    pub fn select_faction(&mut self, id: Option<&str>) -> &[String] {
        self.controls.faction_id = id.map(str::to_string);
        self.refresh()
    }

    /// 清空文本与阵营选择（保留剧透等级）
    pub fn reset(&mut self) -> &[String] {
        self.controls.reset();
        self.refresh()
    }

    /// 切换数据集：整体替换图鉴、重建句柄表并重置过滤
    pub fn set_alternate(&mut self, alternate: bool) -> &[String] {
        let variant = DatasetVariant::from_flag(alternate);
        if self.browser.switch_variant(variant) {
            self.grid = BotGrid::build(self.browser.catalog(), &mut self.factory);
            self.controls.reset();
        }
        self.refresh()
    }

    fn refresh(&mut self) -> &[String] {
        let state = self.browser.filter_state(&self.controls);
        self.visible = self.browser.visible_names(&state);
        debug!("可见条目：{}", preview_names(&self.visible, 10));
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogSet};
    use crate::config::ConfigManager;

    fn page() -> BotPage<String> {
        let default = Catalog::new(
            DatasetVariant::Default,
            vec![
                BotRecord::new("G-34 Mercenary", "Grunt").with_categories(&["0b10"]),
                BotRecord::new("Y-45 Defender", "Sentry").with_categories(&["0b10"]),
                BotRecord::new("Thief", "Derelict").with_categories(&["Derelict"]),
                BotRecord::new("Warlord", "Unique").with_categories(&["Spoilers", "Warlord"]),
                BotRecord::new("MAIN.C", "Unique").with_categories(&["Redacted", "Architect"]),
            ],
        );
        let alternate = Catalog::new(
            DatasetVariant::Alternate,
            vec![
                BotRecord::new("Thief", "Derelict").with_categories(&["Derelict"]),
                BotRecord::new("Z-Courier", "Hauler").with_categories(&["0b10"]),
            ],
        );
        let catalogs = CatalogSet::new(default, alternate).unwrap();
        let browser = BotBrowser::new(&ConfigManager::get_default(), catalogs, DatasetVariant::Default);
        BotPage::with_id_handles(browser, None)
    }

    #[test]
    fn test_initial_state_hides_spoilers() {
        let page = page();
        assert_eq!(page.visible_names(), ["G-34 Mercenary", "Thief", "Y-45 Defender"]);
        assert_eq!(page.visible_faction_ids(), vec!["faction0b10", "factionDerelict", "factionExile"]);

        let view = page.grid_view();
        let ids: Vec<&String> = view.visible.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["g-34_mercenary", "thief", "y-45_defender"]);
        assert_eq!(view.hidden.len(), 2);
    }

    #[test]
    fn test_events_update_visible_names() {
        let mut page = page();
        assert_eq!(page.set_name("me"), ["G-34 Mercenary"]);
        assert_eq!(page.set_name(""), ["G-34 Mercenary", "Thief", "Y-45 Defender"]);
        assert_eq!(page.select_faction(Some("factionDerelict")), ["Thief"]);
        assert_eq!(page.select_faction(None).len(), 3);

        assert_eq!(page.set_spoilers("Spoilers").len(), 4);
        assert!(page.visible_faction_ids().contains(&"factionWarlord"));
        assert_eq!(page.set_spoilers("Redacted").len(), 5);
        assert!(page.visible_faction_ids().contains(&"factionArchitect"));

        assert_eq!(page.set_class("unique"), ["MAIN.C", "Warlord"]);
    }

    #[test]
    fn test_unknown_spoilers_show_all_bots_but_basic_factions() {
        let mut page = page();
        assert_eq!(page.set_spoilers("everything").len(), 5);
        assert_eq!(page.visible_faction_ids(), vec!["faction0b10", "factionDerelict", "factionExile"]);
    }

    #[test]
    fn test_reset_keeps_spoiler_tier() {
        let mut page = page();
        page.set_spoilers("Redacted");
        page.set_class("sentry");
        page.select_faction(Some("faction0b10"));
        assert_eq!(page.visible_names(), ["Y-45 Defender"]);

        assert_eq!(page.reset().len(), 5);
        assert_eq!(page.spoiler_tier(), SpoilerTier::Redacted);
        assert!(page.controls().class.is_empty());
    }

    #[test]
    fn test_switch_dataset_rebuilds_grid() {
        let mut page = page();
        page.set_name("thief");
        assert_eq!(page.set_alternate(true), ["Thief", "Z-Courier"]);
        assert!(page.controls().name.is_empty());

        let view = page.grid_view();
        assert_eq!(view.visible.len(), 2);
        assert!(view.hidden.is_empty());
        assert!(view.visible.iter().all(|(name, _)| *name != "G-34 Mercenary"));

        assert_eq!(page.set_alternate(false).len(), 3);
    }
}

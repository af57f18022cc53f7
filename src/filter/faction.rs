//! 阵营按钮ID -> 分类标签映射

use serde::{Deserialize, Serialize};

use super::state::SpoilerTier;

/// 单个阵营按钮
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionEntry {
    /// 按钮ID
    pub id: String,
    /// 对应的分类标签
    pub category: String,
    /// 显示该按钮所需的最低剧透等级
    #[serde(default)]
    pub visibility: SpoilerTier,
}

impl FactionEntry {
    pub fn new(id: &str, category: &str, visibility: SpoilerTier) -> Self {
        Self {
            id: id.to_string(),
            category: category.to_string(),
            visibility,
        }
    }
}

/// 阵营表（有序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactionTable {
    entries: Vec<FactionEntry>,
}

impl Default for FactionTable {
    fn default() -> Self {
        Self::new(vec![
            FactionEntry::new("faction0b10", "0b10", SpoilerTier::None),
            FactionEntry::new("factionArchitect", "Architect", SpoilerTier::Redacted),
            FactionEntry::new("factionDerelict", "Derelict", SpoilerTier::None),
            FactionEntry::new("factionExile", "Exiles", SpoilerTier::None),
            FactionEntry::new("factionWarlord", "Warlord", SpoilerTier::Spoilers),
            FactionEntry::new("factionZionite", "Zionite", SpoilerTier::Spoilers),
        ])
    }
}

impl FactionTable {
    pub fn new(entries: Vec<FactionEntry>) -> Self {
        Self { entries }
    }

    /// 按钮ID -> 分类标签，未知ID返回 None
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.category.as_str())
    }

    /// 给定剧透等级下可见的按钮ID
    pub fn visible_ids(&self, tier: SpoilerTier) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| tier.includes(e.visibility))
            .map(|e| e.id.as_str())
            .collect()
    }

    pub fn is_visible(&self, id: &str, tier: SpoilerTier) -> bool {
        self.entries
            .iter()
            .any(|e| e.id == id && tier.includes(e.visibility))
    }

    pub fn entries(&self) -> &[FactionEntry] {
        &self.entries
    }
}

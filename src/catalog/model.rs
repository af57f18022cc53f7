//! 图鉴数据模型定义
//! 仅存储机器人数据，无过滤逻辑，支持序列化/反序列化

use std::fmt;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BfResult, BotFilterError};
use crate::filter::state::{REDACTED_TAG, SPOILERS_TAG};

/// 数据集版本（默认 / 备选，两者互斥）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DatasetVariant {
    #[default]
    Default,
    Alternate,
}

impl DatasetVariant {
    /// 由页面上的复选框取值得到版本
    pub fn from_flag(alternate: bool) -> Self {
        if alternate { Self::Alternate } else { Self::Default }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Alternate => "alternate",
        }
    }
}

/// 部件（武器/组件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotPart {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Number")]
    pub number: u32,
    #[serde(default, alias = "Coverage")]
    pub coverage: Option<u32>,
}

impl BotPart {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            number: 1,
            coverage: None,
        }
    }
}

/// 机器人条目（外部数据，只读）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRecord {
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Class")]
    pub class: String,
    #[serde(default, alias = "Categories")]
    pub categories: Vec<String>,
    #[serde(default, alias = "Armament")]
    pub armament: Vec<BotPart>,
    #[serde(default, alias = "Components")]
    pub components: Vec<BotPart>,
    #[serde(default, alias = "Armament Options")]
    pub armament_options: Vec<Vec<BotPart>>,
    #[serde(default, alias = "Component Options")]
    pub component_options: Vec<Vec<BotPart>>,
}

impl BotRecord {
    pub fn new(name: &str, class: &str) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            categories: Vec::new(),
            armament: Vec::new(),
            components: Vec::new(),
            armament_options: Vec::new(),
            component_options: Vec::new(),
        }
    }

    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_armament(mut self, names: &[&str]) -> Self {
        self.armament = names.iter().map(|n| BotPart::named(n)).collect();
        self
    }

    pub fn with_components(mut self, names: &[&str]) -> Self {
        self.components = names.iter().map(|n| BotPart::named(n)).collect();
        self
    }

    pub fn with_armament_option(mut self, names: &[&str]) -> Self {
        self.armament_options.push(names.iter().map(|n| BotPart::named(n)).collect());
        self
    }

    pub fn with_component_option(mut self, names: &[&str]) -> Self {
        self.component_options.push(names.iter().map(|n| BotPart::named(n)).collect());
        self
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// 直接装备的部件：武器在前，组件在后
    pub fn primary_parts(&self) -> impl Iterator<Item = &BotPart> {
        self.armament.iter().chain(self.components.iter())
    }

    /// 互斥的备选部件组：武器组在前，组件组在后
    pub fn alternate_part_groups(&self) -> impl Iterator<Item = &[BotPart]> {
        self.armament_options
            .iter()
            .chain(self.component_options.iter())
            .map(Vec::as_slice)
    }

    /// 剧透标记（用于展示）
    pub fn spoiler_label(&self) -> Option<&'static str> {
        if self.has_category(REDACTED_TAG) {
            Some(REDACTED_TAG)
        } else if self.has_category(SPOILERS_TAG) {
            Some(SPOILERS_TAG)
        } else {
            None
        }
    }
}

// ======== 为 BotRecord 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for BotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.class.is_empty() {
            write!(f, " [{}]", self.class)?;
        }
        if let Some(label) = self.spoiler_label() {
            write!(f, " ({})", label)?;
        }
        Ok(())
    }
}

/// 原始图鉴 JSON：以名称为键的对象，或条目数组
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCatalog {
    Keyed(IndexMap<String, BotRecord>),
    Listed(Vec<BotRecord>),
}

/// 图鉴：名称 -> 条目，保持插入顺序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    variant: DatasetVariant,
    bots: IndexMap<String, BotRecord>,
}

impl Catalog {
    /// 由条目构造，重名时后者原位替换前者
    pub fn new(variant: DatasetVariant, records: impl IntoIterator<Item = BotRecord>) -> Self {
        let mut bots = IndexMap::new();
        for record in records {
            match bots.entry(record.name.clone()) {
                Entry::Occupied(mut entry) => {
                    warn!("图鉴中存在重名条目：{}，使用后出现的条目", record.name);
                    entry.insert(record);
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }
        Self { variant, bots }
    }

    /// 解析图鉴 JSON
    pub fn from_json_str(variant: DatasetVariant, json: &str) -> BfResult<Self> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| BotFilterError::CatalogParseError(format!("{}：{}", variant.as_str(), e)))?;

        let records: Vec<BotRecord> = match raw {
            RawCatalog::Keyed(map) => map
                .into_iter()
                .map(|(key, mut record)| {
                    if record.name.is_empty() {
                        record.name = key;
                    } else if record.name != key {
                        warn!("条目名称 {} 与键 {} 不一致，以键为准", record.name, key);
                        record.name = key;
                    }
                    record
                })
                .collect(),
            RawCatalog::Listed(list) => list,
        };

        if let Some(unnamed) = records.iter().position(|r| r.name.is_empty()) {
            return Err(BotFilterError::CatalogParseError(format!(
                "{}：第{}个条目缺少名称",
                variant.as_str(),
                unnamed + 1
            )));
        }

        Ok(Self::new(variant, records))
    }

    pub fn variant(&self) -> DatasetVariant {
        self.variant
    }

    pub fn get(&self, name: &str) -> Option<&BotRecord> {
        self.bots.get(name)
    }

    /// 按插入顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &BotRecord> {
        self.bots.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bots.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }
}

//! 过滤状态模型
//! 每次求值时由控件值重新构造，不做持久化

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::faction::FactionTable;

/// 剧透标签
pub const SPOILERS_TAG: &str = "Spoilers";
/// 机密标签
pub const REDACTED_TAG: &str = "Redacted";

/// 剧透等级（累积：Redacted ⊇ Spoilers ⊇ None）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SpoilerTier {
    #[default]
    None,
    #[serde(alias = "Spoiler")]
    Spoilers,
    Redacted,
}

impl SpoilerTier {
    /// 解析控件文本，未知值返回 None
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "spoiler" | "spoilers" => Some(Self::Spoilers),
            "redacted" => Some(Self::Redacted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Spoilers => "Spoilers",
            Self::Redacted => "Redacted",
        }
    }

    /// 当前等级下是否展示带有给定标签集的条目
    pub fn allows<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        match self {
            Self::None => !categories
                .iter()
                .any(|c| c.as_ref() == SPOILERS_TAG || c.as_ref() == REDACTED_TAG),
            Self::Spoilers => !categories.iter().any(|c| c.as_ref() == REDACTED_TAG),
            Self::Redacted => true,
        }
    }

    /// 当前等级是否覆盖 `other`
    pub fn includes(&self, other: SpoilerTier) -> bool {
        *self >= other
    }
}

impl fmt::Display for SpoilerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 页面控件的原始取值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterControls {
    pub name: String,
    pub class: String,
    pub part: String,
    /// 剧透下拉框文本，缺失时使用配置默认值
    pub spoilers: Option<String>,
    /// 当前选中的阵营按钮ID
    pub faction_id: Option<String>,
}

impl FilterControls {
    /// 清空文本框与阵营选择，保留剧透等级
    pub fn reset(&mut self) {
        self.name.clear();
        self.class.clear();
        self.part.clear();
        self.faction_id = None;
    }
}

/// 单次过滤求值使用的状态（查询字符串均已转小写）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    spoiler_tier: SpoilerTier,
    name_query: String,
    class_query: String,
    part_query: String,
    faction_tag: Option<String>,
}

impl Default for FilterState {
    /// 无任何约束：剧透等级取 Redacted，查询为空
    fn default() -> Self {
        Self {
            spoiler_tier: SpoilerTier::Redacted,
            name_query: String::new(),
            class_query: String::new(),
            part_query: String::new(),
            faction_tag: None,
        }
    }
}

impl FilterState {
    /// 从控件值构造过滤状态
    pub fn from_controls(
        controls: &FilterControls,
        factions: &FactionTable,
        default_tier: SpoilerTier,
    ) -> Self {
        let spoiler_tier = match controls.spoilers.as_deref() {
            None => default_tier,
            Some(raw) => SpoilerTier::parse(raw).unwrap_or_else(|| {
                debug!("未知剧透等级 {:?}，不做剧透过滤", raw);
                SpoilerTier::Redacted
            }),
        };

        let faction_tag = controls.faction_id.as_deref().and_then(|id| {
            let tag = factions.resolve(id);
            if tag.is_none() {
                debug!("未知阵营ID {:?}，忽略阵营过滤", id);
            }
            tag.map(str::to_string)
        });

        Self {
            spoiler_tier,
            name_query: controls.name.to_lowercase(),
            class_query: controls.class.to_lowercase(),
            part_query: controls.part.to_lowercase(),
            faction_tag,
        }
    }

    pub fn with_spoiler_tier(mut self, tier: SpoilerTier) -> Self {
        self.spoiler_tier = tier;
        self
    }

    pub fn with_name(mut self, query: &str) -> Self {
        self.name_query = query.to_lowercase();
        self
    }

    pub fn with_class(mut self, query: &str) -> Self {
        self.class_query = query.to_lowercase();
        self
    }

    pub fn with_part(mut self, query: &str) -> Self {
        self.part_query = query.to_lowercase();
        self
    }

    pub fn with_faction_tag(mut self, tag: Option<&str>) -> Self {
        self.faction_tag = tag.map(str::to_string);
        self
    }

    pub fn spoiler_tier(&self) -> SpoilerTier {
        self.spoiler_tier
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn class_query(&self) -> &str {
        &self.class_query
    }

    pub fn part_query(&self) -> &str {
        &self.part_query
    }

    pub fn faction_tag(&self) -> Option<&str> {
        self.faction_tag.as_deref()
    }
}

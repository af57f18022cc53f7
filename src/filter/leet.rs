//! 数字/符号 -> 字母 的替换表，用于名称的 leetspeak 匹配

use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// 默认替换表
static DEFAULT_LEET_PAIRS: Lazy<BTreeMap<char, char>> = Lazy::new(|| {
    [('0', 'o'), ('1', 'i'), ('3', 'e'), ('4', 'a'), ('5', 's'), ('7', 't'), ('8', 'b')]
        .into_iter()
        .collect()
});

/// leetspeak 替换表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeetTable {
    pairs: BTreeMap<char, char>,
}

impl Default for LeetTable {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_LEET_PAIRS.clone(),
        }
    }
}

impl LeetTable {
    pub fn new(pairs: BTreeMap<char, char>) -> Self {
        Self { pairs }
    }

    /// 逐字符替换，不在表中的字符原样保留
    pub fn transform(&self, text: &str) -> String {
        text.chars()
            .map(|c| self.pairs.get(&c).copied().unwrap_or(c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = LeetTable::default();
        assert_eq!(table.transform("b0t"), "bot");
        assert_eq!(table.transform("8r-awn"), "br-awn");
        assert_eq!(table.transform("4-7"), "a-t");
        // 未映射的字符保持不变
        assert_eq!(table.transform("z-2 light"), "z-2 light");
    }

    #[test]
    fn test_custom_table_from_json() {
        let table: LeetTable = serde_json::from_str(r#"{"9": "g", "@": "a"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.transform("@9e0"), "age0");
    }
}

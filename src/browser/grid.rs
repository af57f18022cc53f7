//! 名称 -> 渲染句柄映射
//! 句柄由渲染层提供，这里只负责按显示顺序给出可见/隐藏的句柄

use std::collections::HashSet;
use indexmap::IndexMap;
use tracing::warn;

use crate::catalog::{BotRecord, Catalog, DatasetVariant};

/// 单个图鉴对应的句柄表
#[derive(Debug, Clone)]
pub struct BotGrid<H> {
    variant: DatasetVariant,
    handles: IndexMap<String, H>,
}

/// 一次排序后的显示结果
#[derive(Debug)]
pub struct GridView<'g, H> {
    /// 按显示顺序排列
    pub visible: Vec<(&'g str, &'g H)>,
    /// 图鉴顺序
    pub hidden: Vec<(&'g str, &'g H)>,
}

impl<H> BotGrid<H> {
    /// 为图鉴中每个条目创建句柄
    pub fn build<F>(catalog: &Catalog, mut factory: F) -> Self
    where
        F: FnMut(&BotRecord) -> H,
    {
        let handles = catalog
            .iter()
            .map(|bot| (bot.name.clone(), factory(bot)))
            .collect();
        Self {
            variant: catalog.variant(),
            handles,
        }
    }

    pub fn variant(&self) -> DatasetVariant {
        self.variant
    }

    pub fn handle(&self, name: &str) -> Option<&H> {
        self.handles.get(name)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// 按给定顺序排列可见句柄，其余全部隐藏
    pub fn apply<S: AsRef<str>>(&self, order: &[S]) -> GridView<'_, H> {
        let mut shown = HashSet::with_capacity(order.len());
        let mut visible = Vec::with_capacity(order.len());

        for name in order {
            let name = name.as_ref();
            match self.handles.get_key_value(name) {
                Some((key, handle)) => {
                    if shown.insert(key.as_str()) {
                        visible.push((key.as_str(), handle));
                    }
                }
                None => warn!("句柄表中不存在条目：{}", name),
            }
        }

        let hidden = self
            .handles
            .iter()
            .filter(|(name, _)| !shown.contains(name.as_str()))
            .map(|(name, handle)| (name.as_str(), handle))
            .collect();

        GridView { visible, hidden }
    }
}

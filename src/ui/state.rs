//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use crate::models::{Catalog, NewsRecord, Selection};

/// 应用状态
pub struct App {
    pub catalog: Catalog,
    pub selection: Selection,
    pub cursor: usize, // 可见卡片中的焦点位置
    pub mode: AppMode,
    pub columns: usize,              // 上一帧的网格列数
    pub fixed_columns: Option<u16>, // 配置中的固定列数
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Browsing,
    Reading(u32), // 正在阅读的新闻 ID
}

impl App {
    /// 创建新的应用实例，筛选初始为全部
    pub fn new(catalog: Catalog, fixed_columns: Option<u16>) -> Self {
        Self {
            catalog,
            selection: Selection::All,
            cursor: 0,
            mode: AppMode::Browsing,
            columns: 1,
            fixed_columns,
        }
    }

    /// 当前可见条目
    pub fn visible_items(&self) -> Vec<&NewsRecord> {
        self.catalog.visible(self.selection)
    }

    /// 获取当前焦点卡片
    pub fn focused_item(&self) -> Option<&NewsRecord> {
        self.visible_items().get(self.cursor).copied()
    }

    /// 阅读模式下的条目
    pub fn reading_item(&self) -> Option<&NewsRecord> {
        match self.mode {
            AppMode::Reading(id) => self.catalog.get(id),
            AppMode::Browsing => None,
        }
    }
}

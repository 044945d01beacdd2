use chrono::NaiveDate;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// 新闻分类（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    News,
    Events,
    Announcements,
    Achievements,
}

impl Category {
    /// 顶部导航中的顺序
    pub const ALL: [Category; 4] = [
        Category::News,
        Category::Events,
        Category::Announcements,
        Category::Achievements,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Category::News => "news",
            Category::Events => "events",
            Category::Announcements => "announcements",
            Category::Achievements => "achievements",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Events => "Events",
            Category::Announcements => "Announcements",
            Category::Achievements => "Achievements",
        }
    }

    /// 徽章颜色
    pub fn color(self) -> Color {
        match self {
            Category::News => Color::Blue,
            Category::Events => Color::Magenta,
            Category::Announcements => Color::Indexed(208), // orange
            Category::Achievements => Color::Green,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::News => "📰",
            Category::Events => "📅",
            Category::Announcements => "📣",
            Category::Achievements => "🏆",
        }
    }
}

/// 当前筛选：全部或某一分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(Category),
}

impl Selection {
    /// 导航标签顺序
    pub const TABS: [Selection; 5] = [
        Selection::All,
        Selection::Only(Category::News),
        Selection::Only(Category::Events),
        Selection::Only(Category::Announcements),
        Selection::Only(Category::Achievements),
    ];

    pub fn matches(self, category: Category) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(c) => c == category,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Only(c) => c.tag(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Selection::All => "Home",
            Selection::Only(c) => c.label(),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Selection::All => "🏠",
            Selection::Only(c) => c.icon(),
        }
    }

    fn position(self) -> usize {
        Self::TABS.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// 下一个标签（循环）
    pub fn next(self) -> Selection {
        Self::TABS[(self.position() + 1) % Self::TABS.len()]
    }

    /// 上一个标签（循环）
    pub fn previous(self) -> Selection {
        let len = Self::TABS.len();
        Self::TABS[(self.position() + len - 1) % len]
    }
}

/// 新闻条目
#[derive(Debug, Clone, PartialEq)]
pub struct NewsRecord {
    pub id: u32,
    pub title: &'static str,
    pub published_on: NaiveDate,
    pub category: Category,
    pub excerpt: &'static str,
    pub image_url: Option<&'static str>,
}

impl NewsRecord {
    pub fn date_line(&self) -> String {
        self.published_on.format("%-d %B %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("record id must be positive")]
    ZeroId,

    #[error("duplicate record id {0}")]
    DuplicateId(u32),

    #[error("record {0} has an empty title")]
    EmptyTitle(u32),

    #[error("record {0} has an empty excerpt")]
    EmptyExcerpt(u32),
}

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid catalog date"),
    }
}

/// 内置新闻数据
static BUILTIN: [NewsRecord; 6] = [
    NewsRecord {
        id: 1,
        title: "IKIT students take first place at the All-Russian programming olympiad",
        published_on: date(2025, 10, 20),
        category: Category::Achievements,
        excerpt: "The institute team won the prestigious competition, finishing ahead of 50 teams from the country's leading universities.",
        image_url: Some(
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800&h=400&fit=crop",
        ),
    },
    NewsRecord {
        id: 2,
        title: "A new artificial intelligence laboratory opens",
        published_on: date(2025, 10, 18),
        category: Category::News,
        excerpt: "The institute held the opening ceremony of a modern laboratory for research in AI and machine learning.",
        image_url: Some(
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=400&fit=crop",
        ),
    },
    NewsRecord {
        id: 3,
        title: "Join us for the Open Day",
        published_on: date(2025, 10, 15),
        category: Category::Events,
        excerpt: "On October 25 we invite school students and their parents to get to know our institute, its teachers and students.",
        image_url: None,
    },
    NewsRecord {
        id: 4,
        title: "Class schedule changes for October 23-27",
        published_on: date(2025, 10, 14),
        category: Category::Announcements,
        excerpt: "The class schedule will be adjusted because of the scientific conference. Details are on the website.",
        image_url: None,
    },
    NewsRecord {
        id: 5,
        title: "Guest lecture by a Stanford professor",
        published_on: date(2025, 10, 12),
        category: Category::Events,
        excerpt: "Professor John Smith will give a lecture on \"The Future of Quantum Computing\" in the assembly hall.",
        image_url: Some(
            "https://images.unsplash.com/photo-1524178232363-1fb2b075b655?w=800&h=400&fit=crop",
        ),
    },
    NewsRecord {
        id: 6,
        title: "New Data Science course launches",
        published_on: date(2025, 10, 10),
        category: Category::News,
        excerpt: "The institute opens enrollment for a new professional development course for students and specialists.",
        image_url: None,
    },
];

/// 静态新闻目录（按插入顺序）
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<NewsRecord>,
}

impl Catalog {
    pub fn new(records: Vec<NewsRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.id == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(record.id));
            }
            if record.excerpt.trim().is_empty() {
                return Err(CatalogError::EmptyExcerpt(record.id));
            }
        }
        Ok(Self { records })
    }

    /// 内置目录
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(BUILTIN.to_vec())
    }

    /// 按筛选返回可见条目，保持原始顺序
    pub fn visible(&self, selection: Selection) -> Vec<&NewsRecord> {
        self.records
            .iter()
            .filter(|r| selection.matches(r.category))
            .collect()
    }

    pub fn count(&self, selection: Selection) -> usize {
        self.records
            .iter()
            .filter(|r| selection.matches(r.category))
            .count()
    }

    pub fn get(&self, id: u32) -> Option<&NewsRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) fn sample_record(id: u32, category: Category, image_url: Option<&'static str>) -> NewsRecord {
    NewsRecord {
        id,
        title: "Sample title",
        published_on: date(2025, 1, 2),
        category,
        excerpt: "Sample excerpt",
        image_url,
    }
}

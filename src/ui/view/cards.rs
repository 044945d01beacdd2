//! 卡片映射
//!
//! 将可见条目映射为卡片描述，绘制时不再访问目录

use ratatui::style::Color;

use crate::models::{NewsRecord, Selection};
use crate::ui::state::App;

pub const READ_MORE: &str = "Read more →";

/// 单张卡片
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub badge: &'static str,
    pub badge_color: Color,
    pub date: String,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: Option<&'static str>, // None 时不绘制图片区域
    pub focused: bool,
}

impl CardView {
    pub fn from_record(record: &NewsRecord, focused: bool) -> Self {
        Self {
            badge: record.category.label(),
            badge_color: record.category.color(),
            date: record.date_line(),
            title: record.title,
            excerpt: record.excerpt,
            image: record.image_url,
            focused,
        }
    }
}

/// 空状态占位
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub const EMPTY_STATE: EmptyState = EmptyState {
    icon: "❔",
    title: "No publications found",
    message: "There are no materials in this section yet",
};

/// 页面主体：卡片网格或空状态
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Grid(Vec<CardView>),
    Empty(EmptyState),
}

pub fn build_body(app: &App) -> Body {
    let items = app.visible_items();
    if items.is_empty() {
        return Body::Empty(EMPTY_STATE);
    }

    Body::Grid(
        items
            .iter()
            .enumerate()
            .map(|(i, record)| CardView::from_record(record, i == app.cursor))
            .collect(),
    )
}

/// 区块标题
pub fn heading(selection: Selection) -> &'static str {
    match selection {
        Selection::All => "All publications",
        Selection::Only(c) => c.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Category, sample_record};

    #[test]
    fn test_grid_for_all() {
        let app = App::new(Catalog::builtin().unwrap(), None);
        let Body::Grid(cards) = build_body(&app) else {
            panic!("expected a grid");
        };
        assert_eq!(cards.len(), 6);
        assert!(cards[0].focused);
        assert!(cards[1..].iter().all(|c| !c.focused));
        assert_eq!(cards[0].badge, "Achievements");
        assert_eq!(cards[0].badge_color, Color::Green);
        assert_eq!(cards[0].date, "20 October 2025");
        assert_eq!(heading(app.selection), "All publications");
    }

    #[test]
    fn test_image_region_follows_record() {
        let with = CardView::from_record(
            &sample_record(1, Category::News, Some("https://img.example/a.jpg")),
            false,
        );
        let without = CardView::from_record(&sample_record(2, Category::News, None), false);
        assert_eq!(with.image, Some("https://img.example/a.jpg"));
        assert_eq!(without.image, None);
    }

    #[test]
    fn test_empty_state() {
        let catalog =
            Catalog::new(vec![sample_record(1, Category::Achievements, None)]).unwrap();
        let mut app = App::new(catalog, None);
        app.select_category(Selection::Only(Category::News));
        assert_eq!(build_body(&app), Body::Empty(EMPTY_STATE));
        assert_eq!(heading(app.selection), "News");
    }
}

//! 布局计算
//!
//! 弹窗居中与卡片网格的列数、滚动

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 每张卡片占用的行数（含边框）
pub const CARD_HEIGHT: u16 = 12;

/// 在给定区域内居中一个按百分比计算的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 网格列数：窄屏 1 列，中等 2 列，宽屏 3 列
pub fn grid_columns(width: u16, fixed: Option<u16>) -> usize {
    if let Some(n) = fixed {
        return n.max(1) as usize;
    }
    match width {
        0..80 => 1,
        80..120 => 2,
        _ => 3,
    }
}

/// 区域内可容纳的卡片行数（至少一行）
pub fn rows_fit(height: u16) -> usize {
    (height / CARD_HEIGHT).max(1) as usize
}

/// 让焦点所在行保持可见的首行
pub fn first_visible_row(focused_row: usize, rows_fit: usize) -> usize {
    focused_row.saturating_sub(rows_fit.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(60, None), 1);
        assert_eq!(grid_columns(79, None), 1);
        assert_eq!(grid_columns(80, None), 2);
        assert_eq!(grid_columns(119, None), 2);
        assert_eq!(grid_columns(200, None), 3);
        assert_eq!(grid_columns(200, Some(1)), 1);
        assert_eq!(grid_columns(40, Some(3)), 3);
    }

    #[test]
    fn test_scrolling_keeps_focus_visible() {
        assert_eq!(rows_fit(5), 1);
        assert_eq!(rows_fit(25), 2);
        assert_eq!(first_visible_row(0, 2), 0);
        assert_eq!(first_visible_row(1, 2), 0);
        assert_eq!(first_visible_row(2, 2), 1);
        assert_eq!(first_visible_row(2, 1), 2);
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 50, area);
        assert!(inner.x >= 20 && inner.right() <= 80);
        assert!(inner.y >= 12 && inner.bottom() <= 38);
    }
}

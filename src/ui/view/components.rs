//! 通用 UI 组件
//!
//! 弹窗、徽章、导航按钮等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::models::Selection;

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 分类徽章
pub fn badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(Color::White)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

/// [组件] 带计数的导航按钮，选中时高亮
pub fn tab_button(selection: Selection, count: usize, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(
        format!(" {} {} ({}) ", selection.icon(), selection.label(), count),
        style,
    )
}

/// [组件] 图片占位区域，终端内只显示地址
pub fn render_image_region(frame: &mut Frame, area: Rect, url: &str) {
    let placeholder = Paragraph::new(Line::from(vec![
        Span::raw("🖼  "),
        Span::styled(url.to_string(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(placeholder, area);
}

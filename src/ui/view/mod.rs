//! 视图层模块
//!
//! 包含主渲染入口和页面各区域：页眉、卡片网格、页脚

pub mod cards;
pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, AppMode};
use crate::models::{Category, NewsRecord, Selection};
use cards::{Body, CardView, EmptyState, READ_MORE, build_body, heading};
use components::{badge, render_dialog_framework, render_image_region, tab_button};
use layouts::{CARD_HEIGHT, centered_rect, first_visible_row, grid_columns, rows_fit};

const IMAGE_HEIGHT: u16 = 3;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // 页眉与导航
            Constraint::Length(2), // 区块标题
            Constraint::Min(CARD_HEIGHT), // 卡片
            Constraint::Length(6), // 页脚
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    app.columns = grid_columns(chunks[2].width, app.fixed_columns);

    render_header(frame, app, chunks[0]);
    render_heading(frame, app.selection, chunks[1]);
    match build_body(app) {
        Body::Grid(cards) => render_grid(frame, &cards, app.cursor, app.columns, chunks[2]),
        Body::Empty(empty) => render_empty_state(frame, empty, chunks[2]),
    }
    render_footer(frame, chunks[3]);
    render_help(frame, app, chunks[4]);

    if let Some(record) = app.reading_item() {
        render_read_more_dialog(frame, record);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let brand = Line::from(vec![
        Span::styled(
            "🎓 IKIT",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Institute of Space and Information Technologies",
            Style::default().fg(Color::Gray),
        ),
    ]);

    let tabs: Vec<Span> = Selection::TABS
        .iter()
        .map(|s| tab_button(*s, app.catalog.count(*s), *s == app.selection))
        .collect();

    let header = Paragraph::new(vec![brand, Line::from(tabs)])
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_heading(frame: &mut Frame, selection: Selection, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            heading(selection),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Latest news from the life of the institute",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_grid(frame: &mut Frame, cards: &[CardView], cursor: usize, columns: usize, area: Rect) {
    let columns = columns.max(1);
    let rows_fit = rows_fit(area.height);
    let first_row = first_visible_row(cursor / columns, rows_fit);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows_fit])
        .split(area);

    for (row_area, row) in row_areas.iter().zip(cards.chunks(columns).skip(first_row)) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);
        for (cell, card) in cells.iter().zip(row) {
            render_card(frame, card, *cell);
        }
    }
}

fn render_card(frame: &mut Frame, card: &CardView, area: Rect) {
    let border_style = if card.focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = Vec::with_capacity(5);
    if card.image.is_some() {
        constraints.push(Constraint::Length(IMAGE_HEIGHT));
    }
    constraints.extend([
        Constraint::Length(1), // 徽章与日期
        Constraint::Length(2), // 标题
        Constraint::Min(1),    // 摘要
        Constraint::Length(1), // 阅读更多
    ]);
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut slots = parts.iter().copied();
    if let Some(url) = card.image {
        if let Some(image_area) = slots.next() {
            render_image_region(frame, image_area, url);
        }
    }
    let (Some(meta), Some(title), Some(excerpt), Some(more)) =
        (slots.next(), slots.next(), slots.next(), slots.next())
    else {
        return;
    };

    let meta_line = Line::from(vec![
        badge(card.badge, card.badge_color),
        Span::styled(format!("  🕒 {}", card.date), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(meta_line), meta);

    frame.render_widget(
        Paragraph::new(card.title)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true }),
        title,
    );
    frame.render_widget(
        Paragraph::new(card.excerpt)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true }),
        excerpt,
    );

    let more_style = if card.focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Cyan)
    };
    frame.render_widget(Paragraph::new(READ_MORE).style(more_style).centered(), more);
}

fn render_empty_state(frame: &mut Frame, empty: EmptyState, area: Rect) {
    let text = Text::from(vec![
        Line::from(""),
        Line::from(empty.icon),
        Line::from(Span::styled(
            empty.title,
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(empty.message, Style::default().fg(Color::DarkGray))),
    ]);
    frame.render_widget(Paragraph::new(text).centered(), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(inner);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[0]);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);
    let sections = [
        vec![
            Line::from(Span::styled("IKIT SibSU", bold)),
            Line::from(Span::styled(
                "Institute of Space and Information Technologies",
                muted,
            )),
        ],
        vec![
            Line::from(Span::styled("Contacts", bold)),
            Line::from(Span::styled("Krasnoyarsk", muted)),
            Line::from(Span::styled("31 Krasnoyarsky Rabochy Ave.", muted)),
        ],
        vec![
            Line::from(Span::styled("Follow us", bold)),
            Line::from(Span::styled("[✉ Mail]  [☎ Phone]", muted)),
        ],
    ];
    for (column, lines) in columns.iter().zip(sections) {
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), *column);
    }

    frame.render_widget(
        Paragraph::new("© 2025 IKIT SibSU. All rights reserved.")
            .style(muted)
            .centered(),
        rows[1],
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Browsing => {
            let categories: Vec<String> = Category::ALL
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{} {}", i + 1, c.label()))
                .collect();
            format!(
                "[0] Home [{}] [Tab] next [hjkl] move [Enter] read more [q] quit",
                categories.join(" ")
            )
        }
        AppMode::Reading(_) => "[Esc] close".to_string(),
    };

    let text = format!(
        "showing {} of {}  |  {}",
        app.catalog.count(app.selection),
        app.catalog.len(),
        help_text
    );

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_read_more_dialog(frame: &mut Frame, record: &NewsRecord) {
    let area = centered_rect(70, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "Read more");

    let mut lines = vec![
        Line::from(vec![
            badge(record.category.label(), record.category.color()),
            Span::styled(
                format!("  🕒 {}", record.date_line()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            record.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(record.excerpt, Style::default().fg(Color::White))),
    ];
    if let Some(url) = record.image_url {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("🖼  {}", url),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] close",
        Style::default().fg(Color::Gray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, sample_record};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_grid() {
        let mut app = App::new(Catalog::builtin().unwrap(), None);
        let screen = draw(&mut app, 100, 40);
        assert_eq!(app.columns, 2);
        assert!(screen.contains("All publications"));
        assert!(screen.contains("Read more"));
        assert!(screen.contains("Achievements"));
        assert!(screen.contains("showing 6 of 6"));
        assert!(!screen.contains(cards::EMPTY_STATE.title));
    }

    #[test]
    fn test_renders_empty_state_instead_of_grid() {
        let catalog =
            Catalog::new(vec![sample_record(1, Category::Achievements, None)]).unwrap();
        let mut app = App::new(catalog, None);
        app.select_category(Selection::Only(Category::News));
        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("No publications found"));
        assert!(!screen.contains("Read more"));
        assert!(screen.contains("showing 0 of 1"));
    }

    #[test]
    fn test_image_region_only_when_present() {
        let catalog = Catalog::new(vec![
            sample_record(1, Category::News, Some("https://img.example/a.jpg")),
            sample_record(2, Category::Events, None),
        ])
        .unwrap();
        let mut app = App::new(catalog, Some(1));

        let screen = draw(&mut app, 100, 40);
        assert!(screen.contains("img.example"));

        app.select_category(Selection::Only(Category::Events));
        let screen = draw(&mut app, 100, 40);
        assert!(!screen.contains("img.example"));
        assert!(screen.contains("Sample title"));
    }

    #[test]
    fn test_read_more_dialog() {
        let mut app = App::new(Catalog::builtin().unwrap(), None);
        app.dispatch(Action::ReadMore);
        let screen = draw(&mut app, 120, 50);
        assert!(screen.contains(
            "IKIT students take first place at the All-Russian programming olympiad"
        ));
        assert!(screen.contains("images.unsplash.com"));
    }
}

mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::{Config, default_config_path, load_config};
use crate::error::AppResult;
use crate::models::Catalog;
use crate::ui::{App, render};

fn main() -> AppResult<()> {
    // 配置文件路径 (~/.config/ikit-news/config.toml)
    let config = match default_config_path() {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };
    let log_path = logging::init(&config.log)?;

    let catalog = Catalog::builtin()?;
    info!(
        records = catalog.len(),
        log = %log_path.display(),
        "ikit-news starting"
    );

    let mut app = App::new(catalog, config.ui.columns);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("ikit-news stopped");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> AppResult<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}

//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action，未知按键被忽略

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::{Category, Selection};

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Browsing => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('0') | KeyCode::Char('a') | KeyCode::Home => {
                Some(Action::SelectCategory(Selection::All))
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                Some(Action::SelectCategory(Selection::Only(Category::ALL[index])))
            }
            KeyCode::Tab => Some(Action::NextCategory),
            KeyCode::BackTab => Some(Action::PreviousCategory),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Enter => Some(Action::ReadMore),
            _ => None,
        },
        AppMode::Reading(_) => match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Action::Close),
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(&app.mode, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

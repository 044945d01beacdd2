//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和筛选、焦点移动等处理方法

use tracing::debug;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::Selection;

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::SelectCategory(selection) => self.select_category(selection),
            Action::NextCategory => self.select_category(self.selection.next()),
            Action::PreviousCategory => self.select_category(self.selection.previous()),

            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),

            Action::ReadMore => self.read_more(),
            Action::Close => self.close(),
        }
        false
    }

    // ============ 筛选相关 ============

    /// 替换当前筛选并重置焦点
    pub fn select_category(&mut self, selection: Selection) {
        if self.mode != AppMode::Browsing {
            return;
        }
        self.selection = selection;
        self.cursor = 0;
        debug!(
            tab = selection.tag(),
            visible = self.catalog.count(selection),
            "selection changed"
        );
    }

    // ============ 焦点移动 ============

    fn last_index(&self) -> Option<usize> {
        self.catalog.count(self.selection).checked_sub(1)
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if let Some(last) = self.last_index() {
            self.cursor = (self.cursor + 1).min(last);
        }
    }

    /// 向上移动一行
    pub fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.cursor -= self.columns;
        }
    }

    /// 向下移动一行，最后一行不完整时停在最后一张卡片
    pub fn move_down(&mut self) {
        if let Some(last) = self.last_index() {
            let row = self.cursor / self.columns.max(1);
            let last_row = last / self.columns.max(1);
            if row < last_row {
                self.cursor = (self.cursor + self.columns).min(last);
            }
        }
    }

    // ============ 阅读相关 ============

    /// 打开焦点卡片的详情
    pub fn read_more(&mut self) {
        if let Some(item) = self.focused_item() {
            let id = item.id;
            debug!(id, "read more");
            self.mode = AppMode::Reading(id);
        }
    }

    pub fn close(&mut self) {
        if let AppMode::Reading(id) = self.mode {
            debug!(id, "closed");
        }
        self.mode = AppMode::Browsing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Catalog, Category, sample_record};

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), None)
    }

    fn visible_ids(app: &App) -> Vec<u32> {
        app.visible_items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_starts_with_all() {
        let app = app();
        assert_eq!(app.selection, Selection::All);
        assert_eq!(visible_ids(&app), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut app = app();
        app.dispatch(Action::SelectCategory(Selection::Only(Category::Events)));
        let once = visible_ids(&app);
        app.dispatch(Action::SelectCategory(Selection::Only(Category::Events)));
        assert_eq!(visible_ids(&app), once);
        assert_eq!(once, vec![3, 5]);
    }

    #[test]
    fn test_any_tab_follows_any_tab() {
        let mut app = app();
        for from in Selection::TABS {
            for to in Selection::TABS {
                app.select_category(from);
                app.select_category(to);
                assert_eq!(app.selection, to);
            }
        }
    }

    #[test]
    fn test_single_record_scenario() {
        let catalog =
            Catalog::new(vec![sample_record(1, Category::Achievements, None)]).unwrap();
        let mut app = App::new(catalog, None);
        app.select_category(Selection::Only(Category::Achievements));
        assert_eq!(visible_ids(&app), vec![1]);
        app.select_category(Selection::Only(Category::News));
        assert!(app.visible_items().is_empty());
        assert_eq!(app.focused_item(), None);

        // 空列表时的移动和打开都是空操作
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::MoveRight);
        app.dispatch(Action::ReadMore);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.mode, AppMode::Browsing);
    }

    #[test]
    fn test_cursor_clamps_and_resets() {
        let mut app = app();
        app.columns = 3;
        app.dispatch(Action::MoveLeft);
        assert_eq!(app.cursor, 0);
        app.dispatch(Action::MoveDown);
        assert_eq!(app.cursor, 3);
        app.dispatch(Action::MoveDown);
        assert_eq!(app.cursor, 3);
        for _ in 0..10 {
            app.dispatch(Action::MoveRight);
        }
        assert_eq!(app.cursor, 5);
        app.dispatch(Action::MoveUp);
        assert_eq!(app.cursor, 2);

        app.dispatch(Action::NextCategory);
        assert_eq!(app.selection, Selection::Only(Category::News));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_move_down_into_short_last_row() {
        let mut app = app();
        app.columns = 4;
        app.cursor = 3;
        app.dispatch(Action::MoveDown);
        assert_eq!(app.cursor, 5);
    }

    #[test]
    fn test_read_more_and_close() {
        let mut app = app();
        app.select_category(Selection::Only(Category::News));
        app.dispatch(Action::MoveRight);
        app.dispatch(Action::ReadMore);
        assert_eq!(app.mode, AppMode::Reading(6));
        assert_eq!(app.reading_item().map(|r| r.id), Some(6));

        // 阅读时不能切换筛选
        app.select_category(Selection::All);
        assert_eq!(app.selection, Selection::Only(Category::News));

        assert!(!app.dispatch(Action::Close));
        assert_eq!(app.mode, AppMode::Browsing);
        assert_eq!(app.reading_item(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(app.dispatch(Action::Quit));
    }
}

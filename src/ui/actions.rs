//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::Selection;

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    SelectCategory(Selection),
    NextCategory,
    PreviousCategory,

    // 卡片焦点
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,

    ReadMore, // Enter
    Close,    // Esc / Enter / q
}

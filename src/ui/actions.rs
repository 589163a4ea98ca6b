//! Action 枚举定义 (Intent)
//!
//! 按钮点击与按键转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,

    // 照顾宠物
    Feed,
    Play,
    Rest,

    // 菜单
    OpenMenu, // 菜单按钮 / Esc，切换显示
    CloseMenu,
    Save,
    CycleCamera,
    ToggleDebug,
}

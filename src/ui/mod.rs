//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): UserInterface 控制器及其状态数据
//! - View (view/): 纯函数，将渲染面状态映射为终端画面
//! - Intent (actions.rs): 用户交互转化为明确的语义化 Action

pub mod actions;
pub mod elements;
pub mod input;
pub mod logic;
pub mod state;
pub mod surface;
pub mod timer;
pub mod view;

#[cfg(test)]
pub mod testing;

use crate::models::Session;

/// 终端使用的控制器
pub type App = state::UserInterface<Session, surface::Screen, timer::Timers>;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::{UiOptions, UserInterface};
pub use view::render;

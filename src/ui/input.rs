//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 快捷键等同于点击对应按钮，鼠标点击按上一帧的绘制区域命中

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::App;
use super::actions::Action;
use super::elements::ElementId;

/// 一次输入的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click(ElementId),
    Action(Action),
}

/// 根据菜单是否打开和按键获取对应的输入
pub fn get_input(menu_visible: bool, key: KeyCode) -> Option<Input> {
    match key {
        KeyCode::Char('q') => Some(Input::Action(Action::Quit)),
        KeyCode::Esc => Some(Input::Action(Action::OpenMenu)),
        KeyCode::Char(' ') => Some(Input::Action(Action::TogglePause)),
        // 菜单打开时主按钮被遮住，快捷键同样失效
        KeyCode::Char('m') if !menu_visible => Some(Input::Click(ElementId::MenuButton)),
        KeyCode::Char('f') if !menu_visible => Some(Input::Click(ElementId::FeedButton)),
        KeyCode::Char('p') if !menu_visible => Some(Input::Click(ElementId::PlayButton)),
        KeyCode::Char('r') if !menu_visible => Some(Input::Click(ElementId::RestButton)),
        KeyCode::Char('s') if menu_visible => Some(Input::Click(ElementId::SaveButton)),
        KeyCode::Char('c') if menu_visible => Some(Input::Click(ElementId::CameraButton)),
        KeyCode::Char('d') if menu_visible => Some(Input::Click(ElementId::DebugButton)),
        _ => None,
    }
}

fn apply(app: &mut App, input: Input) -> bool {
    match input {
        Input::Click(id) => app.click(id),
        Input::Action(action) => app.dispatch(action),
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_input(app.menu_visible, key) {
        Some(input) => apply(app, input),
        None => false,
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }
    match app.surface.hit_test(mouse.column, mouse.row) {
        Some(id) => apply(app, Input::Click(id)),
        None => false,
    }
}

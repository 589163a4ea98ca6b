//! 渲染面
//!
//! `Surface` 是控制器唯一能看到的界面能力集；`Screen` 是终端使用的保留式实现，
//! 视图层每一帧从它读取状态进行绘制。

use std::collections::HashMap;

use ratatui::layout::Rect;

use super::actions::Action;
use super::elements::{ElementHandle, ElementId, Style, StyleKey};

/// 可寻址的界面元素集合
pub trait Surface {
    /// 按稳定标识符查找元素
    fn resolve(&mut self, id: ElementId) -> Option<ElementHandle>;

    fn set_text(&mut self, handle: ElementHandle, text: &str);

    fn set_style(&mut self, handle: ElementHandle, style: Style);

    /// 订阅点击：点击该元素时产生 `action`
    fn on_click(&mut self, handle: ElementHandle, action: Action);

    /// 查询元素上绑定的点击动作
    fn click_action(&self, handle: ElementHandle) -> Option<Action>;
}

/// 单个元素的保留状态
#[derive(Debug, Clone, Default)]
pub struct ElementState {
    pub text: String,
    pub styles: HashMap<StyleKey, Style>,
    pub on_click: Option<Action>,
    pub area: Option<Rect>, // 上一帧绘制的位置
}

/// 终端渲染面
#[derive(Debug, Default)]
pub struct Screen {
    handles: HashMap<ElementId, ElementHandle>,
    elements: Vec<(ElementId, ElementState)>,
}

impl Screen {
    /// 创建包含全部标准元素的渲染面
    pub fn standard() -> Self {
        Self::with_elements(&ElementId::ALL)
    }

    pub fn with_elements(ids: &[ElementId]) -> Self {
        let mut screen = Self::default();
        for &id in ids {
            if screen.handles.contains_key(&id) {
                continue;
            }
            let handle = ElementHandle(screen.elements.len());
            screen.handles.insert(id, handle);
            screen.elements.push((id, ElementState::default()));
        }
        screen
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.handles
            .get(&id)
            .and_then(|handle| self.elements.get(handle.0))
            .map(|(_, state)| state)
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn style(&self, id: ElementId, key: StyleKey) -> Option<Style> {
        self.element(id).and_then(|e| e.styles.get(&key).copied())
    }

    /// 记录元素本帧的绘制区域
    pub fn set_area(&mut self, id: ElementId, area: Rect) {
        if let Some(handle) = self.handles.get(&id) {
            if let Some((_, state)) = self.elements.get_mut(handle.0) {
                state.area = Some(area);
            }
        }
    }

    /// 清空所有绘制区域（隐藏的元素不应响应鼠标）
    pub fn clear_areas(&mut self) {
        for (_, state) in &mut self.elements {
            state.area = None;
        }
    }

    /// 鼠标命中测试，返回带点击绑定的最上层元素
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .filter(|(_, state)| state.on_click.is_some())
            .find(|(_, state)| {
                state.area.is_some_and(|r| {
                    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
                })
            })
            .map(|(id, _)| *id)
    }
}

impl Surface for Screen {
    fn resolve(&mut self, id: ElementId) -> Option<ElementHandle> {
        self.handles.get(&id).copied()
    }

    fn set_text(&mut self, handle: ElementHandle, text: &str) {
        if let Some((_, state)) = self.elements.get_mut(handle.0) {
            state.text.clear();
            state.text.push_str(text);
        }
    }

    fn set_style(&mut self, handle: ElementHandle, style: Style) {
        if let Some((_, state)) = self.elements.get_mut(handle.0) {
            state.styles.insert(style.key(), style);
        }
    }

    fn on_click(&mut self, handle: ElementHandle, action: Action) {
        if let Some((_, state)) = self.elements.get_mut(handle.0) {
            state.on_click = Some(action);
        }
    }

    fn click_action(&self, handle: ElementHandle) -> Option<Action> {
        self.elements.get(handle.0).and_then(|(_, state)| state.on_click)
    }
}

//! 测试替身：记录调用的渲染面、手动调度器和脚本化宠物

use std::collections::HashMap;
use std::time::Duration;

use super::actions::Action;
use super::elements::{ElementHandle, ElementId, Style, StyleKey};
use super::surface::Surface;
use super::timer::{Scheduler, TimerId, TimerTask};
use crate::models::{CameraView, Game, Needs, Pet, PetState};

/// 渲染面收到的调用
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetText(ElementHandle, String),
    SetStyle(ElementHandle, Style),
    OnClick(ElementHandle, Action),
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    handles: HashMap<ElementId, ElementHandle>,
    texts: HashMap<ElementHandle, String>,
    styles: HashMap<(ElementHandle, StyleKey), Style>,
    clicks: HashMap<ElementHandle, Action>,
    calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn standard() -> Self {
        let mut surface = Self::default();
        for (i, id) in ElementId::ALL.into_iter().enumerate() {
            surface.handles.insert(id, ElementHandle(100 + i));
        }
        surface
    }

    /// 让 `id` 解析到 `target` 的句柄
    pub fn alias(&mut self, id: ElementId, target: ElementId) {
        let handle = self.handles[&target];
        self.handles.insert(id, handle);
    }

    pub fn handle(&self, id: ElementId) -> ElementHandle {
        self.handles[&id]
    }

    pub fn text(&self, id: ElementId) -> &str {
        self.texts
            .get(&self.handle(id))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn style(&self, id: ElementId, key: StyleKey) -> Option<Style> {
        self.styles.get(&(self.handle(id), key)).copied()
    }

    pub fn style_text(&self, id: ElementId, key: StyleKey) -> String {
        self.style(id, key).map(|s| s.to_string()).unwrap_or_default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn resolve(&mut self, id: ElementId) -> Option<ElementHandle> {
        self.handles.get(&id).copied()
    }

    fn set_text(&mut self, handle: ElementHandle, text: &str) {
        self.calls.push(Call::SetText(handle, text.to_string()));
        self.texts.insert(handle, text.to_string());
    }

    fn set_style(&mut self, handle: ElementHandle, style: Style) {
        self.calls.push(Call::SetStyle(handle, style));
        self.styles.insert((handle, style.key()), style);
    }

    fn on_click(&mut self, handle: ElementHandle, action: Action) {
        self.calls.push(Call::OnClick(handle, action));
        self.clicks.insert(handle, action);
    }

    fn click_action(&self, handle: ElementHandle) -> Option<Action> {
        self.clicks.get(&handle).copied()
    }
}

/// 只记录、不计时的调度器
#[derive(Debug, Default)]
pub struct ManualTimers {
    next_id: u64,
    pub scheduled: Vec<(Duration, TimerTask)>,
    pub cancelled: Vec<TimerId>,
}

impl Scheduler for ManualTimers {
    fn schedule_once(&mut self, delay: Duration, task: fn(TimerId) -> TimerTask) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.scheduled.push((delay, task(id)));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.cancelled.push(id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetCall {
    Feed(u8),
    Play(u8),
    Rest(u8),
    TogglePath,
}

#[derive(Debug)]
pub struct MockPet {
    pub name: String,
    pub needs: Needs,
    pub succeed: bool,
    pub show_path: bool,
    pub calls: Vec<PetCall>,
}

impl Pet for MockPet {
    fn name(&self) -> &str {
        &self.name
    }

    fn needs(&self) -> Needs {
        self.needs
    }

    fn state(&self) -> PetState {
        PetState::Idle
    }

    fn age_minutes(&self) -> i64 {
        0
    }

    fn feed(&mut self, amount: u8) -> bool {
        self.calls.push(PetCall::Feed(amount));
        self.succeed
    }

    fn play(&mut self, amount: u8) -> bool {
        self.calls.push(PetCall::Play(amount));
        self.succeed
    }

    fn rest(&mut self, amount: u8) -> bool {
        self.calls.push(PetCall::Rest(amount));
        self.succeed
    }

    fn toggle_path_visualization(&mut self) -> bool {
        self.calls.push(PetCall::TogglePath);
        self.show_path = !self.show_path;
        self.show_path
    }
}

#[derive(Debug)]
pub struct MockGame {
    pub pet: MockPet,
    pub cameras: Vec<CameraView>,
    pub paused: bool,
}

impl MockGame {
    pub fn new(name: &str, hunger: u8, happiness: u8, energy: u8) -> Self {
        Self {
            pet: MockPet {
                name: name.to_string(),
                needs: Needs {
                    hunger,
                    happiness,
                    energy,
                },
                succeed: true,
                show_path: true,
                calls: Vec::new(),
            },
            cameras: Vec::new(),
            paused: false,
        }
    }
}

impl Game for MockGame {
    type Pet = MockPet;

    fn pet(&self) -> &MockPet {
        &self.pet
    }

    fn pet_mut(&mut self) -> &mut MockPet {
        &mut self.pet
    }

    fn switch_camera(&mut self, view: CameraView) {
        self.cameras.push(view);
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

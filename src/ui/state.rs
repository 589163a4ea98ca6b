//! 控制器状态定义 (Model)
//!
//! `UserInterface` 持有游戏会话、渲染面和调度器，构造时一次性解析所有元素句柄

use std::collections::HashMap;
use std::time::Duration;

use super::actions::Action;
use super::elements::{Display, ElementHandle, ElementId, Style, Visibility};
use super::surface::Surface;
use super::timer::{Scheduler, TimerId};
use crate::config::{Settings, Thresholds};
use crate::error::{Error, Result};
use crate::models::{CameraView, Game, Need, Pet};

/// 控制器选项
#[derive(Debug, Clone, Copy)]
pub struct UiOptions {
    pub thresholds: Thresholds,
    pub notification_duration: Duration,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            notification_duration: Duration::from_millis(3000),
        }
    }
}

impl From<&Settings> for UiOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            thresholds: settings.thresholds,
            notification_duration: settings.notification_duration(),
        }
    }
}

/// 一个需求对应的数值标签和填充条
#[derive(Debug, Clone, Copy)]
pub struct StatBinding {
    pub value: ElementHandle,
    pub fill: ElementHandle,
}

/// 构造时解析的全部元素句柄
#[derive(Debug, Clone)]
pub struct Elements {
    pub hud: ElementHandle,
    pub menu: ElementHandle,
    pub notification: ElementHandle,
    pub hunger: StatBinding,
    pub happiness: StatBinding,
    pub energy: StatBinding,
    pub buttons: Vec<(ElementId, ElementHandle)>,
}

impl Elements {
    /// 解析所有必需元素，缺失或重复即失败
    pub fn resolve(surface: &mut impl Surface) -> Result<Self> {
        let mut resolved = HashMap::new();
        let mut owners: HashMap<ElementHandle, ElementId> = HashMap::new();

        for id in ElementId::ALL {
            let handle = surface.resolve(id).ok_or(Error::MissingElement(id))?;
            if let Some(&first) = owners.get(&handle) {
                return Err(Error::DuplicateHandle { first, second: id });
            }
            owners.insert(handle, id);
            resolved.insert(id, handle);
        }

        let get = |id: ElementId| resolved[&id];
        Ok(Self {
            hud: get(ElementId::Hud),
            menu: get(ElementId::Menu),
            notification: get(ElementId::Notification),
            hunger: StatBinding {
                value: get(ElementId::HungerValue),
                fill: get(ElementId::HungerFill),
            },
            happiness: StatBinding {
                value: get(ElementId::HappinessValue),
                fill: get(ElementId::HappinessFill),
            },
            energy: StatBinding {
                value: get(ElementId::EnergyValue),
                fill: get(ElementId::EnergyFill),
            },
            buttons: BUTTON_ACTIONS
                .iter()
                .map(|(id, _)| (*id, get(*id)))
                .collect(),
        })
    }

    pub fn stat(&self, need: Need) -> StatBinding {
        match need {
            Need::Hunger => self.hunger,
            Need::Happiness => self.happiness,
            Need::Energy => self.energy,
        }
    }

    pub fn button(&self, id: ElementId) -> Option<ElementHandle> {
        self.buttons
            .iter()
            .find(|(button, _)| *button == id)
            .map(|(_, handle)| *handle)
    }
}

/// 按钮与点击动作的绑定
pub const BUTTON_ACTIONS: [(ElementId, Action); 8] = [
    (ElementId::FeedButton, Action::Feed),
    (ElementId::PlayButton, Action::Play),
    (ElementId::RestButton, Action::Rest),
    (ElementId::MenuButton, Action::OpenMenu),
    (ElementId::SaveButton, Action::Save),
    (ElementId::CameraButton, Action::CycleCamera),
    (ElementId::DebugButton, Action::ToggleDebug),
    (ElementId::CloseMenuButton, Action::CloseMenu),
];

/// 宠物界面控制器
pub struct UserInterface<G: Game, S: Surface, T: Scheduler> {
    pub game: G,
    pub surface: S,
    pub timers: T,
    pub elements: Elements,
    pub options: UiOptions,
    pub menu_visible: bool,
    pub debug_mode: bool,
    pub active_camera: CameraView,
    pub(super) pending_hide: Option<TimerId>,
}

impl<G: Game, S: Surface, T: Scheduler> UserInterface<G, S, T> {
    /// 创建控制器：解析元素、订阅按钮点击、隐藏菜单和通知
    pub fn new(game: G, mut surface: S, timers: T, options: UiOptions) -> Result<Self> {
        let elements = Elements::resolve(&mut surface)?;

        for (id, action) in BUTTON_ACTIONS {
            if let Some(handle) = elements.button(id) {
                surface.on_click(handle, action);
            }
        }
        surface.set_style(elements.menu, Style::Display(Display::None));
        surface.set_style(elements.notification, Style::Opacity(Visibility::Hidden));

        log::info!(
            "interface ready for {} ({} elements bound)",
            game.pet().name(),
            ElementId::ALL.len()
        );

        Ok(Self {
            game,
            surface,
            timers,
            elements,
            options,
            menu_visible: false,
            debug_mode: false,
            active_camera: CameraView::Default,
            pending_hide: None,
        })
    }

    /// 当前待执行的隐藏通知任务
    #[allow(dead_code)]
    pub fn pending_hide(&self) -> Option<TimerId> {
        self.pending_hide
    }
}

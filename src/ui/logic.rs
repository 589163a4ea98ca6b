//! 业务逻辑处理 (Update/Dispatch)
//!
//! 读取宠物状态写入界面元素，并把按钮点击转发给宠物

use std::time::Duration;

use super::actions::Action;
use super::elements::{Display, ElementHandle, ElementId, StatLevel, Style, Visibility};
use super::state::UserInterface;
use super::surface::Surface;
use super::timer::{Scheduler, TimerTask};
use crate::config::Thresholds;
use crate::models::{Game, Need, Pet};

pub const FEED_AMOUNT: u8 = 20;
pub const PLAY_AMOUNT: u8 = 15;
pub const REST_AMOUNT: u8 = 25;

/// 百分比到颜色等级的映射
pub fn stat_level(value: u8, thresholds: Thresholds) -> StatLevel {
    if value < thresholds.critical {
        StatLevel::Critical
    } else if value < thresholds.warning {
        StatLevel::Warning
    } else {
        StatLevel::Normal
    }
}

impl<G: Game, S: Surface, T: Scheduler> UserInterface<G, S, T> {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        log::debug!("dispatch {:?}", action);
        match action {
            Action::Quit => return true,
            Action::TogglePause => self.toggle_pause(),
            Action::Feed => self.on_feed_click(),
            Action::Play => self.on_play_click(),
            Action::Rest => self.on_rest_click(),
            Action::OpenMenu => self.on_menu_click(),
            Action::CloseMenu => self.on_close_menu_click(),
            Action::Save => self.on_save_click(),
            Action::CycleCamera => self.on_camera_click(),
            Action::ToggleDebug => self.on_debug_click(),
        }
        false
    }

    /// 点击某个元素；没有绑定动作的元素什么也不做
    pub fn click(&mut self, id: ElementId) -> bool {
        let Some(handle) = self.elements.button(id) else {
            return false;
        };
        match self.surface.click_action(handle) {
            Some(action) => self.dispatch(action),
            None => false,
        }
    }

    /// 处理到期的延时任务
    pub fn on_timer(&mut self, task: TimerTask) {
        match task {
            TimerTask::HideNotification(id) => {
                if self.pending_hide != Some(id) {
                    log::trace!("ignoring stale hide timer {:?}", id);
                    return;
                }
                self.pending_hide = None;
                self.surface.set_style(
                    self.elements.notification,
                    Style::Opacity(Visibility::Hidden),
                );
            }
        }
    }

    // ============ 状态显示 ============

    /// 刷新整个 HUD
    pub fn update(&mut self) {
        self.update_header();
        self.update_stats();
    }

    /// 标题行：名字、状态、年龄
    pub fn update_header(&mut self) {
        let pet = self.game.pet();
        let header = format!(
            "{} · {} · {}m old",
            pet.name(),
            pet.state().as_str(),
            pet.age_minutes()
        );
        self.surface.set_text(self.elements.hud, &header);
    }

    /// 根据宠物需求刷新数值、填充宽度和颜色
    pub fn update_stats(&mut self) {
        let needs = self.game.pet().needs();

        for need in Need::ALL {
            let value = needs.get(need).min(100);
            let binding = self.elements.stat(need);

            self.surface.set_text(binding.value, &format!("{}%", value));
            self.surface.set_style(binding.fill, Style::Width(value));
            self.update_stat_colors(binding.fill, value);
        }
    }

    /// 数值低时给填充条警告色
    pub fn update_stat_colors(&mut self, fill: ElementHandle, value: u8) {
        let level = stat_level(value, self.options.thresholds);
        self.surface.set_style(fill, Style::Background(level));
    }

    // ============ 通知 ============

    /// 显示通知，`duration` 为空时使用默认时长；替换尚未隐藏的上一条
    pub fn show_notification(&mut self, message: &str, duration: Option<Duration>) {
        let duration = duration.unwrap_or(self.options.notification_duration);

        self.surface.set_text(self.elements.notification, message);
        self.surface.set_style(
            self.elements.notification,
            Style::Opacity(Visibility::Shown),
        );

        if let Some(previous) = self.pending_hide.take() {
            self.timers.cancel(previous);
        }
        self.pending_hide = Some(
            self.timers
                .schedule_once(duration, TimerTask::HideNotification),
        );
    }

    // ============ 菜单 ============

    /// 切换菜单显示
    pub fn toggle_menu(&mut self) {
        self.menu_visible = !self.menu_visible;
        self.apply_menu_display();
    }

    /// 关闭菜单，无论之前是否打开
    pub fn close_menu(&mut self) {
        self.menu_visible = false;
        self.apply_menu_display();
    }

    fn apply_menu_display(&mut self) {
        let display = if self.menu_visible {
            Display::Block
        } else {
            Display::None
        };
        self.surface
            .set_style(self.elements.menu, Style::Display(display));
    }

    pub fn on_menu_click(&mut self) {
        self.toggle_menu();
    }

    pub fn on_close_menu_click(&mut self) {
        self.close_menu();
    }

    /// 暂停/恢复游戏
    pub fn toggle_pause(&mut self) {
        let paused = !self.game.is_paused();
        self.game.set_paused(paused);
        let message = if paused { "Game paused" } else { "Game resumed" };
        self.show_notification(message, None);
    }

    // ============ 照顾宠物 ============

    pub fn on_feed_click(&mut self) {
        let pet = self.game.pet_mut();
        let message = if pet.feed(FEED_AMOUNT) {
            format!("{} is eating...", pet.name())
        } else {
            log::info!("{} refused food", pet.name());
            format!("{} isn't hungry right now.", pet.name())
        };
        self.show_notification(&message, None);
    }

    pub fn on_play_click(&mut self) {
        let pet = self.game.pet_mut();
        let message = if pet.play(PLAY_AMOUNT) {
            format!("Playing with {}!", pet.name())
        } else {
            log::info!("{} is too tired to play", pet.name());
            format!("{} is too tired to play.", pet.name())
        };
        self.show_notification(&message, None);
    }

    pub fn on_rest_click(&mut self) {
        let pet = self.game.pet_mut();
        let message = if pet.rest(REST_AMOUNT) {
            format!("{} is resting...", pet.name())
        } else {
            log::info!("{} refused to rest", pet.name());
            format!(
                "{} doesn't want to sleep right now, too much energy.",
                pet.name()
            )
        };
        self.show_notification(&message, None);
    }

    // ============ 菜单按钮 ============

    /// 存档尚未实现，只提示并关闭菜单
    pub fn on_save_click(&mut self) {
        self.show_notification("Game saved!", None);
        self.close_menu();
    }

    /// 轮换镜头视角
    pub fn on_camera_click(&mut self) {
        self.active_camera = self.active_camera.next();
        self.game.switch_camera(self.active_camera);
        let message = format!("Camera view: {}", self.active_camera.as_str());
        self.show_notification(&message, None);
    }

    pub fn on_debug_click(&mut self) {
        self.debug_mode = !self.debug_mode;
        self.game.pet_mut().toggle_path_visualization();
        let message = format!(
            "Debug mode: {}",
            if self.debug_mode { "ON" } else { "OFF" }
        );
        self.show_notification(&message, None);
    }
}

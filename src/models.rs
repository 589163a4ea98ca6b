use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 宠物需求快照（百分比 0-100）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Needs {
    pub hunger: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl Needs {
    pub fn get(&self, need: Need) -> u8 {
        match need {
            Need::Hunger => self.hunger,
            Need::Happiness => self.happiness,
            Need::Energy => self.energy,
        }
    }
}

/// 需求种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Need {
    Hunger,
    Happiness,
    Energy,
}

impl Need {
    pub const ALL: [Need; 3] = [Need::Hunger, Need::Happiness, Need::Energy];
}

/// 宠物状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetState {
    #[default]
    Idle,
    Sleeping,
}

impl PetState {
    pub fn as_str(self) -> &'static str {
        match self {
            PetState::Idle => "idle",
            PetState::Sleeping => "sleeping",
        }
    }
}

/// 镜头视角
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraView {
    #[default]
    Default,
    TopDown,
    FirstPerson,
}

impl CameraView {
    pub fn next(self) -> Self {
        match self {
            CameraView::Default => CameraView::TopDown,
            CameraView::TopDown => CameraView::FirstPerson,
            CameraView::FirstPerson => CameraView::Default,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CameraView::Default => "default",
            CameraView::TopDown => "top-down",
            CameraView::FirstPerson => "first-person",
        }
    }
}

/// 控制器所需的宠物能力
pub trait Pet {
    fn name(&self) -> &str;
    fn needs(&self) -> Needs;
    fn state(&self) -> PetState;
    /// 出生至今的分钟数
    fn age_minutes(&self) -> i64;

    fn feed(&mut self, amount: u8) -> bool;
    fn play(&mut self, amount: u8) -> bool;
    fn rest(&mut self, amount: u8) -> bool;

    /// 切换调试路径显示，返回切换后的状态
    fn toggle_path_visualization(&mut self) -> bool;
}

/// 控制器所需的游戏会话能力
pub trait Game {
    type Pet: Pet;

    fn pet(&self) -> &Self::Pet;
    fn pet_mut(&mut self) -> &mut Self::Pet;
    fn switch_camera(&mut self, view: CameraView);

    fn is_paused(&self) -> bool;
    /// 暂停或恢复模拟
    fn set_paused(&mut self, paused: bool);
}

/// 需求每秒变化量
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayRates {
    pub hunger: f32,
    pub happiness: f32,
    pub energy: f32,
    pub sleep_regen: f32,
}

impl Default for DecayRates {
    fn default() -> Self {
        Self {
            hunger: 0.05,
            happiness: 0.03,
            energy: 0.02,
            sleep_regen: 0.2,
        }
    }
}

const PLAY_ENERGY_COST: f32 = 5.0;
const TOO_TIRED: f32 = 10.0;
const TOO_RESTED: f32 = 90.0;
const WAKE_UP: f32 = 80.0;

/// 模拟的虚拟宠物
#[derive(Debug, Clone)]
pub struct VirtualPet {
    pub name: String,
    pub born_at: DateTime<Local>,
    pub state: PetState,
    pub show_path: bool,
    hunger: f32, // 100 为饱，0 为饿
    happiness: f32,
    energy: f32,
    rates: DecayRates,
}

impl VirtualPet {
    pub fn new(name: String, rates: DecayRates) -> Self {
        Self {
            name,
            born_at: Local::now(),
            state: PetState::Idle,
            show_path: true,
            hunger: 100.0,
            happiness: 100.0,
            energy: 100.0,
            rates,
        }
    }

    /// 推进模拟 `dt` 秒
    pub fn tick(&mut self, dt: f32) {
        self.hunger = (self.hunger - dt * self.rates.hunger).max(0.0);
        self.happiness = (self.happiness - dt * self.rates.happiness).max(0.0);

        match self.state {
            PetState::Sleeping => {
                self.energy = (self.energy + dt * self.rates.sleep_regen).min(100.0);
                if self.energy > WAKE_UP {
                    self.state = PetState::Idle;
                    log::debug!("{} woke up", self.name);
                }
            }
            PetState::Idle => {
                self.energy = (self.energy - dt * self.rates.energy).max(0.0);
                if self.energy < TOO_TIRED {
                    self.state = PetState::Sleeping;
                    log::debug!("{} fell asleep from exhaustion", self.name);
                }
            }
        }
    }

    #[cfg(test)]
    pub fn set_needs(&mut self, hunger: f32, happiness: f32, energy: f32) {
        self.hunger = hunger;
        self.happiness = happiness;
        self.energy = energy;
    }
}

fn percent(value: f32) -> u8 {
    value.floor().clamp(0.0, 100.0) as u8
}

impl Pet for VirtualPet {
    fn name(&self) -> &str {
        &self.name
    }

    fn needs(&self) -> Needs {
        Needs {
            hunger: percent(self.hunger),
            happiness: percent(self.happiness),
            energy: percent(self.energy),
        }
    }

    fn state(&self) -> PetState {
        self.state
    }

    fn age_minutes(&self) -> i64 {
        (Local::now() - self.born_at).num_minutes().max(0)
    }

    fn feed(&mut self, amount: u8) -> bool {
        if self.hunger >= 100.0 {
            return false;
        }
        self.hunger = (self.hunger + f32::from(amount)).min(100.0);
        true
    }

    fn play(&mut self, amount: u8) -> bool {
        if self.energy < TOO_TIRED {
            return false;
        }
        self.happiness = (self.happiness + f32::from(amount)).min(100.0);
        self.energy = (self.energy - PLAY_ENERGY_COST).max(0.0);
        true
    }

    fn rest(&mut self, amount: u8) -> bool {
        if self.energy >= TOO_RESTED {
            return false;
        }
        self.energy = (self.energy + f32::from(amount)).min(100.0);
        self.state = PetState::Sleeping;
        true
    }

    fn toggle_path_visualization(&mut self) -> bool {
        self.show_path = !self.show_path;
        self.show_path
    }
}

/// 一次游戏会话
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub pet: VirtualPet,
    pub camera: CameraView,
    pub paused: bool,
    pub focused: bool,
}

impl Session {
    pub fn new(pet: VirtualPet) -> Self {
        Self {
            id: Uuid::new_v4(),
            pet,
            camera: CameraView::Default,
            paused: false,
            focused: true,
        }
    }

    /// 每帧推进；暂停或终端失去焦点时宠物不衰减
    pub fn update(&mut self, dt: f32) {
        if self.paused || !self.focused {
            return;
        }
        self.pet.tick(dt);
    }
}

impl Game for Session {
    type Pet = VirtualPet;

    fn pet(&self) -> &VirtualPet {
        &self.pet
    }

    fn pet_mut(&mut self) -> &mut VirtualPet {
        &mut self.pet
    }

    fn switch_camera(&mut self, view: CameraView) {
        log::debug!("session {} camera -> {}", self.id, view.as_str());
        self.camera = view;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        log::info!(
            "session {} {}",
            self.id,
            if paused { "paused" } else { "resumed" }
        );
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pet() -> VirtualPet {
        VirtualPet::new("Bitzy".to_string(), DecayRates::default())
    }

    #[test]
    fn test_needs_are_floored_and_clamped() {
        let mut pet = pet();
        pet.set_needs(79.9, -3.0, 140.0);
        assert_eq!(
            pet.needs(),
            Needs {
                hunger: 79,
                happiness: 0,
                energy: 100
            }
        );
    }

    #[test]
    fn test_feed_refuses_when_full() {
        let mut pet = pet();
        assert!(!pet.feed(20));

        pet.set_needs(90.0, 50.0, 50.0);
        assert!(pet.feed(20));
        assert_eq!(pet.needs().hunger, 100);
    }

    #[test]
    fn test_play_costs_energy() {
        let mut pet = pet();
        pet.set_needs(50.0, 40.0, 50.0);
        assert!(pet.play(15));
        assert_eq!(pet.needs().happiness, 55);
        assert_eq!(pet.needs().energy, 45);

        pet.set_needs(50.0, 40.0, 5.0);
        assert!(!pet.play(15));
    }

    #[test]
    fn test_rest_puts_pet_to_sleep() {
        let mut pet = pet();
        assert!(!pet.rest(25));
        assert_eq!(pet.state, PetState::Idle);

        pet.set_needs(50.0, 50.0, 30.0);
        assert!(pet.rest(25));
        assert_eq!(pet.needs().energy, 55);
        assert_eq!(pet.state, PetState::Sleeping);
    }

    #[test]
    fn test_tick_decays_and_sleeps() {
        let mut pet = pet();
        pet.set_needs(50.0, 50.0, 10.5);
        pet.tick(100.0);
        assert_eq!(pet.needs().hunger, 45);
        assert_eq!(pet.needs().happiness, 47);
        assert_eq!(pet.state, PetState::Sleeping);

        pet.tick(400.0);
        assert_eq!(pet.state, PetState::Idle);
    }

    #[test]
    fn test_session_skips_decay_when_unfocused() {
        let mut session = Session::new(pet());
        session.focused = false;
        session.update(1000.0);
        assert_eq!(session.pet.needs().hunger, 100);

        session.focused = true;
        session.update(1000.0);
        assert_eq!(session.pet.needs().hunger, 50);
    }

    #[test]
    fn test_paused_session_does_not_decay() {
        let mut session = Session::new(pet());
        session.set_paused(true);
        session.update(1000.0);
        assert!(session.is_paused());
        assert_eq!(session.pet.needs().hunger, 100);

        session.set_paused(false);
        session.update(1000.0);
        assert_eq!(session.pet.needs().hunger, 50);
    }

    #[test]
    fn test_camera_cycle() {
        let mut view = CameraView::Default;
        for _ in 0..3 {
            view = view.next();
        }
        assert_eq!(view, CameraView::Default);
    }
}

//! 界面元素定义
//!
//! 固定的元素角色、不透明句柄以及样式属性

use std::fmt;

/// 界面元素角色（稳定标识符）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    Hud,
    Menu,
    Notification,
    HungerValue,
    HungerFill,
    HappinessValue,
    HappinessFill,
    EnergyValue,
    EnergyFill,
    FeedButton,
    PlayButton,
    RestButton,
    MenuButton,
    SaveButton,
    CameraButton,
    DebugButton,
    CloseMenuButton,
}

impl ElementId {
    /// 构造时必须全部解析成功的元素
    pub const ALL: [ElementId; 17] = [
        ElementId::Hud,
        ElementId::Menu,
        ElementId::Notification,
        ElementId::HungerValue,
        ElementId::HungerFill,
        ElementId::HappinessValue,
        ElementId::HappinessFill,
        ElementId::EnergyValue,
        ElementId::EnergyFill,
        ElementId::FeedButton,
        ElementId::PlayButton,
        ElementId::RestButton,
        ElementId::MenuButton,
        ElementId::SaveButton,
        ElementId::CameraButton,
        ElementId::DebugButton,
        ElementId::CloseMenuButton,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Hud => "hud",
            ElementId::Menu => "menu",
            ElementId::Notification => "notification",
            ElementId::HungerValue => "hunger-value",
            ElementId::HungerFill => "hunger-fill",
            ElementId::HappinessValue => "happiness-value",
            ElementId::HappinessFill => "happiness-fill",
            ElementId::EnergyValue => "energy-value",
            ElementId::EnergyFill => "energy-fill",
            ElementId::FeedButton => "feed-btn",
            ElementId::PlayButton => "play-btn",
            ElementId::RestButton => "rest-btn",
            ElementId::MenuButton => "menu-btn",
            ElementId::SaveButton => "save-btn",
            ElementId::CameraButton => "camera-btn",
            ElementId::DebugButton => "debug-btn",
            ElementId::CloseMenuButton => "close-menu-btn",
        }
    }

    /// 按钮上显示的文字，非按钮返回 None
    pub fn label(self) -> Option<&'static str> {
        match self {
            ElementId::FeedButton => Some("[F]eed"),
            ElementId::PlayButton => Some("[P]lay"),
            ElementId::RestButton => Some("[R]est"),
            ElementId::MenuButton => Some("[M]enu"),
            ElementId::SaveButton => Some("[S]ave"),
            ElementId::CameraButton => Some("[C]amera"),
            ElementId::DebugButton => Some("[D]ebug"),
            ElementId::CloseMenuButton => Some("[Esc] Close"),
            _ => None,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 渲染面分配的元素句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(pub usize);

/// 状态条等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLevel {
    Critical,
    Warning,
    Normal,
}

/// 显示/隐藏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

/// 通知的可见度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

/// 样式属性键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Width,
    Opacity,
    Display,
    Background,
}

/// 样式属性值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Width(u8), // 百分比
    Opacity(Visibility),
    Display(Display),
    Background(StatLevel),
}

impl Style {
    pub fn key(&self) -> StyleKey {
        match self {
            Style::Width(_) => StyleKey::Width,
            Style::Opacity(_) => StyleKey::Opacity,
            Style::Display(_) => StyleKey::Display,
            Style::Background(_) => StyleKey::Background,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Width(percent) => write!(f, "{}%", percent),
            Style::Opacity(Visibility::Shown) => f.write_str("1"),
            Style::Opacity(Visibility::Hidden) => f.write_str("0"),
            Style::Display(Display::Block) => f.write_str("block"),
            Style::Display(Display::None) => f.write_str("none"),
            Style::Background(StatLevel::Critical) => f.write_str("red"),
            Style::Background(StatLevel::Warning) => f.write_str("orange"),
            Style::Background(StatLevel::Normal) => f.write_str("green"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_distinct() {
        let names: HashSet<&str> = ElementId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(names.len(), ElementId::ALL.len());
    }

    #[test]
    fn test_style_rendering() {
        assert_eq!(Style::Width(80).to_string(), "80%");
        assert_eq!(Style::Opacity(Visibility::Shown).to_string(), "1");
        assert_eq!(Style::Display(Display::Block).to_string(), "block");
        assert_eq!(Style::Display(Display::None).to_string(), "none");
    }
}

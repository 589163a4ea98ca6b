//! 通用 UI 组件
//!
//! 对话框、按钮、状态条等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::ui::elements::StatLevel;

/// 状态等级对应的颜色
pub fn level_color(level: StatLevel) -> Color {
    match level {
        StatLevel::Critical => Color::Red,
        StatLevel::Warning => Color::Yellow,
        StatLevel::Normal => Color::Green,
    }
}

/// 按百分比生成填充条文字
pub fn bar_text(width: u16, percent: u8) -> (String, String) {
    let filled = (u32::from(width) * u32::from(percent.min(100)) / 100) as usize;
    let empty = usize::from(width).saturating_sub(filled);
    ("█".repeat(filled), "░".repeat(empty))
}

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

/// [组件] 带名称、数值和颜色的状态条
pub fn render_stat_bar(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    value: &str,
    percent: u8,
    level: StatLevel,
) {
    let bar_width = area.width.saturating_sub(18);
    let (filled, empty) = bar_text(bar_width, percent);
    let color = level_color(level);

    let line = Line::from(vec![
        Span::styled(format!("{:<10}", name), Style::default().fg(Color::Gray)),
        Span::styled(filled, Style::default().fg(color)),
        Span::styled(empty, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {:>5}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

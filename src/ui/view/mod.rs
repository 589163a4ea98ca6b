//! 视图层模块
//!
//! 只从保留式渲染面读取元素状态进行绘制，并记录按钮位置供鼠标命中

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use super::App;
use super::elements::{Display, ElementId, StatLevel, Style as ElementStyle, StyleKey, Visibility};
use super::surface::Screen;
use crate::models::{CameraView, Pet, PetState};
use components::{render_button, render_dialog_framework, render_stat_bar};
use layouts::{centered_rect, columns};

const MAIN_BUTTONS: [ElementId; 4] = [
    ElementId::FeedButton,
    ElementId::PlayButton,
    ElementId::RestButton,
    ElementId::MenuButton,
];

const MENU_BUTTONS: [ElementId; 4] = [
    ElementId::SaveButton,
    ElementId::CameraButton,
    ElementId::DebugButton,
    ElementId::CloseMenuButton,
];

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    app.surface.clear_areas();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(5), // 需求
            Constraint::Min(6),    // 宠物
            Constraint::Length(1), // 通知
            Constraint::Length(3), // 按钮
        ])
        .split(frame.area());

    render_hud(frame, &app.surface, chunks[0]);
    render_stats(frame, &app.surface, chunks[1]);
    render_pet(frame, app, chunks[2]);
    render_notification(frame, &app.surface, chunks[3]);
    // 菜单打开时只有菜单按钮响应鼠标
    let menu_open = is_displayed(&app.surface, ElementId::Menu);
    render_buttons(frame, &mut app.surface, chunks[4], !menu_open);

    if menu_open {
        render_menu(frame, &mut app.surface);
    }
}

fn is_displayed(screen: &Screen, id: ElementId) -> bool {
    screen.style(id, StyleKey::Display) == Some(ElementStyle::Display(Display::Block))
}

fn render_hud(frame: &mut Frame, screen: &Screen, area: Rect) {
    let hud = Paragraph::new(screen.text(ElementId::Hud))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().title("DigiPet").borders(Borders::ALL));
    frame.render_widget(hud, area);
}

fn render_stats(frame: &mut Frame, screen: &Screen, area: Rect) {
    let block = Block::default().title("Needs").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(inner);

    let stats = [
        ("Hunger", ElementId::HungerValue, ElementId::HungerFill),
        ("Happiness", ElementId::HappinessValue, ElementId::HappinessFill),
        ("Energy", ElementId::EnergyValue, ElementId::EnergyFill),
    ];

    for ((name, value, fill), row) in stats.into_iter().zip(rows.iter()) {
        let percent = match screen.style(fill, StyleKey::Width) {
            Some(ElementStyle::Width(p)) => p,
            _ => 0,
        };
        let level = match screen.style(fill, StyleKey::Background) {
            Some(ElementStyle::Background(level)) => level,
            _ => StatLevel::Normal,
        };
        render_stat_bar(frame, *row, name, screen.text(value), percent, level);
    }
}

fn pet_art(state: PetState, camera: CameraView) -> &'static [&'static str] {
    match (state, camera) {
        (PetState::Sleeping, _) => &["  ( -.- ) z", "  /(   )\\ ", "   ^^ ^^  "],
        (PetState::Idle, CameraView::Default) => &["  ( o.o ) ", "  /(   )\\ ", "   ^^ ^^  "],
        (PetState::Idle, CameraView::TopDown) => &["   .---.  ", "  ( o o ) ", "   '---'  "],
        (PetState::Idle, CameraView::FirstPerson) => &[
            " .-------. ",
            " |  O O  | ",
            " |   o   | ",
            " '-------' ",
        ],
    }
}

fn render_pet(frame: &mut Frame, app: &App, area: Rect) {
    let pet = &app.game.pet;
    let mut lines: Vec<Line> = pet_art(pet.state(), app.game.camera)
        .iter()
        .map(|row| Line::from(*row))
        .collect();

    if app.debug_mode {
        let needs = pet.needs();
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "state={} camera={} path={} hunger={} happiness={} energy={}",
            pet.state().as_str(),
            app.game.camera.as_str(),
            pet.show_path,
            needs.hunger,
            needs.happiness,
            needs.energy
        )));
        lines.push(Line::from(format!("session={}", app.game.id)));
    }

    let view = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!("View: {}", app.game.camera.as_str()))
                .borders(Borders::ALL),
        );
    frame.render_widget(view, area);
}

fn render_notification(frame: &mut Frame, screen: &Screen, area: Rect) {
    let shown = screen.style(ElementId::Notification, StyleKey::Opacity)
        == Some(ElementStyle::Opacity(Visibility::Shown));
    if !shown {
        return;
    }
    let notification = Paragraph::new(screen.text(ElementId::Notification))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(notification, area);
}

fn render_buttons(frame: &mut Frame, screen: &mut Screen, area: Rect, clickable: bool) {
    for (id, cell) in MAIN_BUTTONS.into_iter().zip(columns(area, MAIN_BUTTONS.len())) {
        render_button(frame, cell, id.label().unwrap_or_default());
        if clickable {
            screen.set_area(id, cell);
        }
    }
}

fn render_menu(frame: &mut Frame, screen: &mut Screen) {
    let area = centered_rect(40, 60, frame.area());
    screen.set_area(ElementId::Menu, area);
    let inner = render_dialog_framework(frame, area, "Menu");

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(inner);

    for (id, row) in MENU_BUTTONS.into_iter().zip(rows.iter()) {
        render_button(frame, *row, id.label().unwrap_or_default());
        screen.set_area(id, *row);
    }
}

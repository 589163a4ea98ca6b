mod config;
mod error;
mod models;
mod ui;

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{Settings, load_settings};
use crate::error::Result;
use crate::models::{Session, VirtualPet};
use crate::ui::surface::Screen;
use crate::ui::timer::Timers;
use crate::ui::{App, UiOptions, UserInterface, render};

/// 终端虚拟宠物
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// 配置文件路径（默认 ~/.config/digipet/config.toml）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 覆盖配置中的宠物名字
    #[arg(long)]
    name: Option<String>,
}

/// 获取应用目录 (如 ~/.local/share/digipet/)
fn app_dir(base: Option<PathBuf>) -> io::Result<PathBuf> {
    let dir = base
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate user directory"))?
        .join("digipet");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 日志写入文件，终端处于 raw 模式时不能写 stderr
fn init_logging(settings: &Settings) -> io::Result<PathBuf> {
    let log_path = app_dir(dirs::data_dir())?.join("digipet.log");
    let file = File::create(&log_path)?;

    env_logger::Builder::new()
        .parse_filters(&settings.log_level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(log_path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => app_dir(dirs::config_dir())?.join("config.toml"),
    };
    let mut settings = load_settings(&config_path)?;
    if let Some(name) = args.name {
        settings.pet_name = name;
    }

    let log_path = init_logging(&settings)?;
    log::info!("config loaded from {}", config_path.display());
    settings.sanitize();

    // 创建会话和控制器
    let pet = VirtualPet::new(settings.pet_name.clone(), settings.decay);
    let session = Session::new(pet);
    log::info!("session {} started", session.id);
    let mut app = UserInterface::new(
        session,
        Screen::standard(),
        Timers::new(),
        UiOptions::from(&settings),
    )?;

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app, settings.tick_interval());

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    log::info!("session {} ended", app.game.id);
    println!("Log written to {}", log_path.display());

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        app.update();
        terminal.draw(|f| render(f, app))?;

        // 等到下一次模拟或下一个到期任务
        let mut deadline = last_tick + tick;
        if let Some(next) = app.timers.next_deadline() {
            deadline = deadline.min(next);
        }
        let timeout = deadline.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ui::handle_key_event(app, key.code)
                }
                Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
                Event::FocusLost => {
                    app.game.focused = false;
                    false
                }
                Event::FocusGained => {
                    app.game.focused = true;
                    false
                }
                _ => false,
            };
            if quit {
                return Ok(());
            }
        }

        for task in app.timers.due(Instant::now()) {
            app.on_timer(task);
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            app.game.update(elapsed.as_secs_f32());
            last_tick = Instant::now();
        }
    }
}

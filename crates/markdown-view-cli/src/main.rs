mod app;
mod convert;

use anyhow::{Context, Result};
use app::{App, Popup};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_view_config::Config;
use markdown_view_engine::{inspect::dump_blocks, normalize, parse_markdown, render_markdown};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    View,
    Print,
    Dump,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Show { mode: Mode, path: PathBuf },
    InitConfig,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [flag] if flag == "--init-config" => Some(Command::InitConfig),
        [path] if !path.starts_with("--") => Some(Command::Show {
            mode: Mode::View,
            path: PathBuf::from(path),
        }),
        [flag, path] => {
            let mode = match flag.as_str() {
                "--print" => Mode::Print,
                "--dump" => Mode::Dump,
                _ => return None,
            };
            Some(Command::Show {
                mode,
                path: PathBuf::from(path),
            })
        }
        _ => None,
    }
}

fn load_config() -> Config {
    match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("markdown-view-cli");

    let Some(command) = parse_args(args.get(1..).unwrap_or_default()) else {
        eprintln!("Usage: {program} [--print | --dump] <file.md>");
        eprintln!("       {program} --init-config");
        process::exit(1);
    };

    let (mode, path) = match command {
        Command::InitConfig => return init_config(),
        Command::Show { mode, path } => (mode, path),
    };

    let markdown = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match mode {
        Mode::Dump => {
            print!("{}", dump_blocks(&normalize(parse_markdown(&markdown))));
            Ok(())
        }
        Mode::Print => {
            let config = load_config();
            let text = render_markdown(&markdown, &config.theme);
            convert::print_styled(&text, &mut stdout().lock())?;
            Ok(())
        }
        Mode::View => {
            let config = load_config();
            let text = render_markdown(&markdown, &config.theme);
            let title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            view(App::new(text, config.viewer.scroll_step), title, config.viewer.wrap)
        }
    }
}

fn init_config() -> Result<()> {
    let config_path = Config::config_path();
    if config_path.exists() {
        eprintln!(
            "Config file already exists at {}, leaving it alone",
            config_path.display()
        );
        return Ok(());
    }
    Config::default().save()?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn view(mut app: App, title: String, wrap: bool) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &title, wrap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    title: &str,
    wrap: bool,
) -> Result<()> {
    // X11 clipboards lose their contents when the owner is dropped.
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(e) => {
            log::warn!("clipboard unavailable: {e}");
            None
        }
    };

    loop {
        terminal.draw(|f| ui(f, app, title, wrap))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.popup.is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('m') | KeyCode::Char('p')
            ) {
                app.close_popup();
            }
            continue;
        }

        app.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Down | KeyCode::Char('j') => app.move_down(),
            KeyCode::Up | KeyCode::Char('k') => app.move_up(),
            KeyCode::PageDown => app.page_down(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::Char('v') => app.toggle_line_selection(),
            KeyCode::Char('a') => app.select_all(),
            KeyCode::Char('y') => {
                let payload = app.copy_payload();
                app.status = Some(match clipboard.as_mut() {
                    Some(clipboard) => match clipboard.set_text(payload.clone()) {
                        Ok(()) => format!("Copied {} characters", payload.chars().count()),
                        Err(e) => {
                            log::warn!("copy failed: {e}");
                            format!("Copy failed: {e}")
                        }
                    },
                    None => "Clipboard unavailable".to_string(),
                });
            }
            KeyCode::Char('m') => app.open_menu(),
            KeyCode::Char('p') => app.preview_math(),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App, title: &str, wrap: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let content_area = chunks[0];
    app.set_viewport_height(usize::from(content_area.height.saturating_sub(2)));

    let selected = app.selected_lines();
    let lines: Vec<Line> = convert::to_lines(&app.text)
        .into_iter()
        .enumerate()
        .skip(app.scroll)
        .map(|(index, line)| {
            if index == app.cursor {
                line.patch_style(Style::default().add_modifier(Modifier::REVERSED))
            } else if selected.contains(&index) {
                line.patch_style(Style::default().bg(Color::Rgb(0x3a, 0x3d, 0x5c)))
            } else {
                line
            }
        })
        .collect();

    let mut content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string()),
    );
    if wrap {
        content = content.wrap(Wrap { trim: false });
    }
    f.render_widget(content, content_area);

    let help = match &app.status {
        Some(status) => Line::from(Span::raw(status.clone())),
        None => Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("j/k: Move | "),
            Span::raw("v: Select | a: Select all | y: Copy | "),
            Span::raw("m: Menu | p: Math"),
        ]),
    };
    f.render_widget(Paragraph::new(help), chunks[1]);

    match &app.popup {
        Some(Popup::Menu) => {
            let items: Vec<Line> = app
                .menu_entries()
                .into_iter()
                .map(|(item, enabled)| {
                    let style = if enabled {
                        Style::default()
                    } else {
                        Style::default().fg(Color::DarkGray)
                    };
                    Line::from(Span::styled(item.title(), style))
                })
                .collect();
            draw_popup(f, "Menu", items);
        }
        Some(Popup::Math(preview)) => {
            draw_popup(f, preview.title, vec![Line::from(preview.latex.clone())]);
        }
        None => {}
    }
}

fn draw_popup(f: &mut Frame, title: &str, lines: Vec<Line>) {
    let content_width = lines
        .iter()
        .map(Line::width)
        .chain([title.chars().count()])
        .max()
        .unwrap_or(0);
    let (width, height) = popup_size(content_width, lines.len());
    let area = centered(f.area(), width, height);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()))
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Outer popup size: content plus border and padding, clamped to `u16`.
fn popup_size(content_width: usize, line_count: usize) -> (u16, u16) {
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let height = u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    (width, height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

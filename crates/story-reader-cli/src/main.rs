mod app;
mod render;

use anyhow::Result;
use app::{App, Prompt, Screen};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};
use story_reader_config::Config;
use story_reader_engine::{
    io::{self, FileKeyValueStore},
    library::LocalIdentity,
    parsing::parse,
    progress::{KeyValueStore, ProgressTracker},
};

const PAGE_LINES: u16 = 10;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() == 3 && args[1] == "dump" {
        return dump(Path::new(&args[2]));
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.len() == 2 => {
            log::warn!("Ignoring unreadable config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <library-folder-path>", args[0]);
            process::exit(1);
        }
    };

    let library_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        library_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match &config {
            Some(config) => {
                library_path = config.library_path.clone();
                from_config = true;
            }
            None => {
                eprintln!("Error: No library path provided and no config file found");
                eprintln!("Usage: {} <library-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [library-folder-path]", args[0]);
        eprintln!("       {} dump <chapter-file>", args[0]);
        process::exit(1);
    };

    let library = match io::load_library(&library_path) {
        Ok(library) => library,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Library path '{}'{} is invalid: {e}",
                library_path.display(),
                source
            );
            process::exit(1);
        }
    };

    let tracker = open_progress(&Config::progress_path(), config.as_ref());
    let identity = LocalIdentity::new();
    if let Some(user_id) = config.as_ref().and_then(|config| config.user_id.clone()) {
        identity.sign_in(user_id);
    }
    let settings = config
        .as_ref()
        .map(|config| config.reader)
        .unwrap_or_default();

    let mut app = App::new(library, tracker, identity, settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);
    app.record_position();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    if let Some(mut config) = config
        && config.reader != app.settings()
    {
        config.reader = app.settings();
        if let Err(e) = config.save() {
            log::warn!("Failed to save reader settings: {e}");
        }
    }

    Ok(())
}

/// Reading progress kept at `path`. An unusable file is logged and replaced,
/// so the reader always starts.
fn open_progress(path: &Path, config: Option<&Config>) -> ProgressTracker<FileKeyValueStore> {
    let store = FileKeyValueStore::open_or_reset(path);
    match config {
        Some(config) => ProgressTracker::with_max_age(
            store,
            chrono::TimeDelta::days(i64::from(config.progress_max_age_days)),
        ),
        None => ProgressTracker::new(store),
    }
}

/// Prints the parsed blocks of a chapter file as JSON.
fn dump(path: &Path) -> Result<()> {
    let content = io::read_chapter_file(path)?;
    let blocks = parse(&content);
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn run_app<S: KeyValueStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if let Some(prompt) = app.prompt() {
                let confirming = matches!(prompt, Prompt::ConfirmDelete { .. });
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') if confirming => app.submit_prompt()?,
                    _ if confirming => app.cancel_prompt(),
                    KeyCode::Enter => app.submit_prompt()?,
                    KeyCode::Esc => app.cancel_prompt(),
                    KeyCode::Backspace => app.prompt_backspace(),
                    KeyCode::Char(c) => app.prompt_input(c),
                    _ => {}
                }
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_down(PAGE_LINES),
                KeyCode::PageUp => app.scroll_up(PAGE_LINES),
                KeyCode::Enter | KeyCode::Right => app.activate()?,
                KeyCode::Esc | KeyCode::Left | KeyCode::Backspace => {
                    app.back();
                }
                KeyCode::Char('c') if app.screen() == Screen::Stories => app.resume()?,
                KeyCode::Char('a') if app.screen() == Screen::Stories => app.start_new_story(),
                KeyCode::Char('r') if app.screen() == Screen::Stories => {
                    app.start_rename_story()
                }
                KeyCode::Char('d') if app.screen() == Screen::Stories => {
                    app.start_delete_story()
                }
                KeyCode::Char('n') if app.screen() == Screen::Reading => app.next_chapter()?,
                KeyCode::Char('p') if app.screen() == Screen::Reading => {
                    app.previous_chapter()?
                }
                KeyCode::Char('+') | KeyCode::Char('=') => app.increase_font_size(),
                KeyCode::Char('-') => app.decrease_font_size(),
                KeyCode::Char('0') => app.reset_font_size(),
                _ => {}
            }
        }
    }
}

fn ui<S: KeyValueStore>(f: &mut Frame, app: &mut App<S>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    let highlight = Style::default().bg(Color::Yellow).fg(Color::Black);

    // Left panel: stories, or chapters once a story is open
    if app.screen() == Screen::Stories {
        let items: Vec<ListItem> = app
            .story_labels()
            .into_iter()
            .map(|label| ListItem::new(Line::from(label)))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Stories"))
            .highlight_style(highlight);
        f.render_stateful_widget(list, chunks[0], app.story_state_mut());
    } else {
        let items: Vec<ListItem> = app
            .chapter_labels()
            .into_iter()
            .map(|label| ListItem::new(Line::from(label)))
            .collect();
        let title = app
            .view()
            .map(|view| view.story.title.clone())
            .or_else(|| app.selected_story().map(|story| story.title.clone()))
            .unwrap_or_else(|| "Chapters".to_string());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(highlight);
        f.render_stateful_widget(list, chunks[0], app.chapter_state_mut());
    }

    // Right panel: chapter text
    let content_block = Block::default().borders(Borders::ALL).title(
        app.view()
            .filter(|_| app.screen() == Screen::Reading)
            .map_or_else(|| "Chapter".to_string(), |view| view.chapter.display_title()),
    );
    let inner = content_block.inner(chunks[1]);
    f.render_widget(content_block, chunks[1]);

    let text = if app.screen() == Screen::Reading {
        app.chapter_lines()
    } else if app.chapters().is_empty() && app.screen() == Screen::Chapters {
        vec![Line::from("This story has no chapters yet")]
    } else {
        vec![Line::from("Select a chapter to start reading")]
    };
    let column = reading_column(inner, app.settings().column_width());
    app.set_viewport(column.width, column.height);
    let content = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0));
    f.render_widget(content, column);

    // Prompt, latest status message, or help
    let help_text = if let Some(prompt) = app.prompt() {
        Line::from(Span::raw(prompt.label()))
    } else if let Some(status) = app.status() {
        Line::from(Span::raw(status.to_string()))
    } else {
        Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Move | "),
            Span::raw("Enter: Open | Esc: Back | "),
            Span::raw("c: Continue | a/r/d: Add/Rename/Delete | "),
            Span::raw("n/p: Next/Prev chapter | +/-/0: Font size"),
        ])
    };
    f.render_widget(Paragraph::new(help_text), rows[1]);
}

/// Centers a column of at most `width` cells inside `area`.
fn reading_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

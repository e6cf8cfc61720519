use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

mod app;
mod config;
mod ui;

use app::{App, Screen};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Credential precedence: config file -> environment -> entry screen
    let file_config = config::load();
    let api_key = config::resolve_api_key(&file_config);
    let mut app = App::new(api_key, file_config.model.clone())?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    // Leaving the key-entry screen without a credential is a startup
    // failure, not a session error.
    if !app.has_credential() {
        eprintln!("🚨 선생님이 칠판을 준비하지 못했어요. (API 키를 설정해주세요)");
        eprintln!(
            "💡 ~/.homeroom/config.json 에 api_key 를 넣거나 GEMINI_API_KEY 환경변수를 설정하세요."
        );
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    let tick_rate = tokio::time::Duration::from_millis(100);

    loop {
        // Draw UI
        terminal.draw(|f| ui::draw(f, app))?;

        // Handle events
        if crossterm::event::poll(tick_rate)? {
            if let Event::Key(key) = crossterm::event::read()? {
                if handle_key_event(app, key) {
                    return Ok(());
                }
            }
        }

        app.on_tick();
    }
}

/// Returns true when the app should quit.
fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('t') if app.screen == Screen::Chat => app.cycle_category(),
            KeyCode::Char('s') if app.screen == Screen::Chat => app.save_log(),
            KeyCode::Char('l') if app.screen == Screen::Chat => app.clear_log(),
            _ => {}
        }
        return false;
    }

    match app.screen {
        Screen::ApiKey => match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => {
                let entered = app.key_input.trim().to_string();
                if entered.is_empty() {
                    return false;
                }
                if let Err(err) = app.set_api_key(&entered) {
                    app.status = Some(format!("⚠ {err}"));
                }
            }
            KeyCode::Char(c) => app.key_input.push(c),
            KeyCode::Backspace => {
                app.key_input.pop();
            }
            _ => {}
        },
        Screen::IdeaSelect => match key.code {
            KeyCode::Esc => return true,
            KeyCode::Up => app.idea_cursor_up(),
            KeyCode::Down => app.idea_cursor_down(),
            KeyCode::Enter => app.submit_idea(),
            KeyCode::Char(c) if app.custom_idea_selected() => app.input.push(c),
            KeyCode::Backspace if app.custom_idea_selected() => {
                app.input.pop();
            }
            _ => {}
        },
        Screen::Chat => match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => app.submit_chat(),
            KeyCode::Char(c) => app.input.push(c),
            KeyCode::Backspace => {
                app.input.pop();
            }
            _ => {}
        },
    }

    false
}

pub mod app;
pub mod event;
pub mod fields;
pub mod theme;
pub mod ui;

pub use app::App;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

use app::InputMode;

/// Run the interactive form until the user quits.
pub fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let events = EventHandler::new(250); // 250ms tick for flash expiry

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        match events.next() {
            Event::Key(key) => handle_key_event(&mut app, key),
            Event::Tick => app.update_flash(),
        }

        if app.should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Normal => match key.code {
            // Quit
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.should_quit = true
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => app.next_field(),
            KeyCode::Char('k') | KeyCode::Up => app.previous_field(),
            KeyCode::Tab => app.next_section(),
            KeyCode::BackTab => app.previous_section(),

            // Editing
            KeyCode::Enter => app.activate_selected(),
            KeyCode::Char('l') | KeyCode::Right => app.cycle_select(true),
            KeyCode::Char('h') | KeyCode::Left => app.cycle_select(false),
            KeyCode::Char('d') | KeyCode::Delete => app.clear_selected(),

            // Score / reset
            KeyCode::Char('s') => app.submit(),
            KeyCode::Char('r') => app.reset(),

            // Help
            KeyCode::Char('?') => app.show_help(),

            _ => {}
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.confirm_edit(),
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Backspace => {
                app.edit_buffer.pop();
            }
            KeyCode::Char(c) => app.edit_buffer.push(c),
            _ => {}
        },
        InputMode::Result => match key.code {
            KeyCode::Char('b') => app.show_breakdown(),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::Esc | KeyCode::Enter => app.dismiss_result(),
            _ => {}
        },
        InputMode::Breakdown => match key.code {
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Enter => app.dismiss_breakdown(),
            _ => {}
        },
        InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

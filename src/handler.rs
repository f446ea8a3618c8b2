use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use poehali_studio::input::TextInput;
use poehali_studio::landing::Section;
use poehali_studio::{PendingGeneration, WorkflowState};

use crate::app::{App, FocusPane, InputMode};
use crate::tui::AppEvent;

pub fn handle_event(app: &mut App, event: AppEvent, tx: &UnboundedSender<AppEvent>) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key, tx),
        // The next draw picks up the new size
        AppEvent::Resize => {}
        AppEvent::Tick => app.tick(),
        AppEvent::Generated { ticket, outcome } => {
            app.generator.complete(ticket, outcome, &mut app.toasts);
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, tx: &UnboundedSender<AppEvent>) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.generator.is_open() {
        handle_generator_dialog(app, key, tx);
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_landing_normal(app, key),
        InputMode::Editing => handle_contact_editing(app, key),
    }
}

fn handle_landing_normal(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            if app.focus == FocusPane::Navigation {
                app.nav_down();
            } else {
                app.scroll_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.focus == FocusPane::Navigation {
                app.nav_up();
            } else {
                app.scroll_up();
            }
        }
        KeyCode::Char('g') => app.nav_first(),
        KeyCode::Char('G') => app.nav_last(),
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(section) = app.sections.get(idx).copied() {
                app.jump_to(section);
            }
        }

        // Enter the section; the contact section drops straight into its form
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            if app.selected_section() == Section::Contact {
                app.focus_contact_form();
            } else {
                app.focus = FocusPane::Content;
            }
        }

        // Back
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Esc => {
            app.focus = FocusPane::Navigation;
        }

        KeyCode::Tab => {
            app.focus = match app.focus {
                FocusPane::Navigation => FocusPane::Content,
                FocusPane::Content => FocusPane::Navigation,
            };
        }

        // Contact form shortcut
        KeyCode::Char('c') => app.focus_contact_form(),

        // Generator dialog
        KeyCode::Char('a') => app.open_generator(),

        // Dismiss oldest toast
        KeyCode::Char('x') => app.toasts.dismiss(),

        _ => {}
    }
}

fn handle_contact_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            if app.contact.submit(&mut app.toasts) {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            app.contact.focus = app.contact.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.contact.focus = app.contact.focus.prev();
        }
        code => edit_text(app.contact.focused_mut(), code),
    }
}

fn handle_generator_dialog(app: &mut App, key: KeyEvent, tx: &UnboundedSender<AppEvent>) {
    if key.code == KeyCode::Esc {
        app.close_generator();
        return;
    }

    // Result view: "another" or "save"
    if matches!(app.generator.state(), WorkflowState::Succeeded(_)) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('n') => app.generator.reset(),
            KeyCode::Char('s') | KeyCode::Enter => {
                if app.generator.accept(&mut app.toasts) {
                    app.input_mode = InputMode::Normal;
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if let Ok(Some(pending)) = app.generator.submit(&mut app.toasts) {
                spawn_generation(app, pending, tx.clone());
            }
        }
        // Input is frozen while the request is running
        _ if app.generator.is_in_flight() => {}
        code => edit_text(app.generator.input_mut(), code),
    }
}

/// Run the outbound call on its own task and report back through the event loop
fn spawn_generation(app: &App, pending: PendingGeneration, tx: UnboundedSender<AppEvent>) {
    let client = app.client.clone();
    tokio::spawn(async move {
        let outcome = client.generate(&pending.request).await;
        // The receiver is gone only when the app is shutting down
        let _ = tx.send(AppEvent::Generated {
            ticket: pending.ticket,
            outcome,
        });
    });
}

fn edit_text(input: &mut TextInput, code: KeyCode) {
    match code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.left(),
        KeyCode::Right => input.right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
}

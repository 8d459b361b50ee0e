use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::{StoreError, TransactionStore};
use crate::ui::app::{App, FormField, InputMode, Screen};
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(store: &mut TransactionStore) -> Result<()> {
    let mut app = App::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut TransactionStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app, store);
        })?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Insert => handle_insert_input(key, app, store)?,
                InputMode::Confirm => handle_confirm_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut TransactionStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => app.screen = Screen::Transactions,
        KeyCode::Char('2') => app.screen = Screen::Overview,
        KeyCode::Char('3') => app.screen = Screen::Budget,
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Char('j') | KeyCode::Down => {
            if app.screen == Screen::Transactions {
                scroll_down(
                    &mut app.transaction_index,
                    &mut app.transaction_scroll,
                    store.transactions().len(),
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.screen == Screen::Transactions {
                scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
            }
        }
        KeyCode::Char('g') => {
            if app.screen == Screen::Transactions {
                scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Transactions {
                scroll_to_bottom(
                    &mut app.transaction_index,
                    &mut app.transaction_scroll,
                    store.transactions().len(),
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Transactions {
                for _ in 0..app.visible_rows / 2 {
                    scroll_down(
                        &mut app.transaction_index,
                        &mut app.transaction_scroll,
                        store.transactions().len(),
                        app.visible_rows,
                    );
                }
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Transactions {
                for _ in 0..app.visible_rows / 2 {
                    scroll_up(&mut app.transaction_index, &mut app.transaction_scroll);
                }
            }
        }
        KeyCode::Char('a') if app.screen == Screen::Transactions => {
            // A fresh draft; an interrupted edit stays interrupted.
            if store.editing().is_some() {
                store.cancel_edit();
            }
            app.reset_form();
            app.input_mode = InputMode::Insert;
        }
        KeyCode::Char('e') | KeyCode::Enter if app.screen == Screen::Transactions => {
            begin_edit_selected(app, store)?;
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => {
            request_delete_selected(app, store);
        }
        KeyCode::Esc => {
            if store.editing().is_some() {
                store.cancel_edit();
                app.reset_form();
                app.set_status("Edit cancelled");
            } else {
                app.status_message.clear();
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_insert_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut TransactionStore,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            if store.editing().is_some() {
                store.cancel_edit();
                app.reset_form();
            }
            app.input_mode = InputMode::Normal;
            app.set_status("Cancelled");
        }
        KeyCode::Enter => submit_form(app, store)?,
        KeyCode::Tab | KeyCode::Down => app.form_field = app.form_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.form_field = app.form_field.prev(),
        KeyCode::Backspace => {
            app.form_value_mut().pop();
        }
        KeyCode::Char('+') | KeyCode::Char('=') if app.form_field == FormField::Category => {
            app.cycle_category(1);
        }
        KeyCode::Char('-') if app.form_field == FormField::Category => {
            app.cycle_category(-1);
        }
        KeyCode::Char(c) => app.form_value_mut().push(c),
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(
    key: event::KeyEvent,
    app: &mut App,
    store: &mut TransactionStore,
) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            if let Some((id, description)) = app.pending_delete.take() {
                match store.delete(id) {
                    Ok(true) => app.set_status(format!("Deleted: {description}")),
                    Ok(false) => app.set_status("Already gone"),
                    Err(StoreError::Persist(e)) => return Err(e),
                    Err(e) => app.set_status(e.to_string()),
                }
                if app.transaction_index >= store.transactions().len() {
                    app.transaction_index = store.transactions().len().saturating_sub(1);
                }
            }
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
        }
        _ => {
            app.pending_delete = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}

// ── Store-facing flows ───────────────────────────────────────

fn submit_form(app: &mut App, store: &mut TransactionStore) -> Result<()> {
    let result = match store.editing() {
        Some(id) => store.update(id, &app.form).map(|()| (id, "Updated")),
        None => store.create(&app.form).map(|id| (id, "Added")),
    };

    match result {
        Ok((id, verb)) => {
            app.reset_form();
            app.input_mode = InputMode::Normal;
            app.set_status(format!("{verb} transaction #{id}"));
        }
        Err(StoreError::Persist(e)) => return Err(e),
        // Validation / NotFound: keep the form as typed for correction.
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn begin_edit_selected(app: &mut App, store: &mut TransactionStore) -> Result<()> {
    let Some(txn) = store.transactions().get(app.transaction_index) else {
        app.set_status("Nothing selected");
        return Ok(());
    };
    let id = txn.id;
    match store.begin_edit(id) {
        Ok(draft) => {
            app.form = draft;
            app.form_field = FormField::Amount;
            app.input_mode = InputMode::Insert;
        }
        Err(StoreError::Persist(e)) => return Err(e),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn request_delete_selected(app: &mut App, store: &TransactionStore) {
    let Some(txn) = store.transactions().get(app.transaction_index) else {
        app.set_status("Nothing selected");
        return;
    };
    app.confirm_message = format!("Delete '{}'?", txn.description);
    app.pending_delete = Some((txn.id, txn.description.clone()));
    app.input_mode = InputMode::Confirm;
}

fn cycle_screen(app: &mut App, delta: i32) {
    let screens = Screen::all();
    let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let next = if delta > 0 {
        (idx + 1) % screens.len()
    } else if idx == 0 {
        screens.len() - 1
    } else {
        idx - 1
    };
    app.screen = screens[next];
}

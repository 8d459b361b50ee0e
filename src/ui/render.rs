use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::theme;
use crate::store::TransactionStore;

pub(crate) fn render(f: &mut Frame, app: &App, store: &TransactionStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app, store);
    render_status_bar(f, chunks[2], app, store);
    render_message_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    match app.screen {
        Screen::Transactions => super::screens::transactions::render(f, area, app, store),
        Screen::Overview => super::screens::overview::render(f, area, app, store),
        Screen::Budget => super::screens::budget::render(f, area, app, store),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Insert => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
        InputMode::Confirm => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::RED)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(" {} | {} txns", app.screen, store.transactions().len());

    let right = match app.input_mode {
        InputMode::Insert => " Tab next field | +/- category | Enter save | Esc cancel ",
        InputMode::Confirm => " y confirm | any other key cancel ",
        InputMode::Normal => match app.screen {
            Screen::Transactions => " a add | e edit | D delete | ? help ",
            Screen::Overview | Screen::Budget => " 1-3 switch | Tab cycle | ? help ",
        },
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Confirm => Line::from(vec![
            Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
            Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
        ]),
        _ => {
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press a to add a transaction, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::message_bar_style(),
                ))
            }
        }
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::BAR_BG));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let help_text = vec![
        Line::from(Span::styled(
            " FinTUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Navigation",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           1-3        Switch tabs",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Page Down/Up          q          Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Transactions",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  a               Add (opens the form)   e/Enter    Edit selected",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  D               Delete selected        Esc        Cancel",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Form",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Tab/Down        Next field             Shift-Tab/Up  Previous field",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  +/- (Category)  Cycle categories       Enter      Save",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            " Press any key to close ",
            Style::default().fg(theme::TEXT_DIM),
        )),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::store::TransactionStore;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(40)])
        .split(area);

    render_form(f, chunks[0], app, store);
    render_table(f, chunks[1], app, store);
}

fn render_form(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    // The title doubles as the submit label: it reflects whether the next
    // save will create a new record or update the one being edited.
    let title = match store.editing() {
        Some(id) => format!(" Update Transaction #{id} "),
        None => " Add Transaction ".to_string(),
    };

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (i, field) in FormField::all().iter().enumerate() {
        let focused = app.input_mode == InputMode::Insert && *field == app.form_field;
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value = app.form_value(*field);
        let value_style = if focused {
            theme::normal_style().add_modifier(Modifier::UNDERLINED)
        } else {
            theme::normal_style()
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {:<12}", field.label()), label_style),
            Span::styled(truncate(value, 20), value_style),
        ]));

        if focused && *field == FormField::Category {
            lines.push(Line::from(Span::styled(
                "              +/- to cycle",
                theme::dim_style(),
            )));
        }

        if i == FormField::all().len() - 1 {
            lines.push(Line::from(""));
            let hint = match app.input_mode {
                InputMode::Insert => " Enter save | Esc cancel",
                _ => " Press a to start typing",
            };
            lines.push(Line::from(Span::styled(hint, theme::dim_style())));
        }
    }

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title, theme::title_style())),
    );
    f.render_widget(form, area);

    // Place the terminal cursor at the end of the focused input.
    if app.input_mode == InputMode::Insert {
        if let Some(row) = FormField::all().iter().position(|x| *x == app.form_field) {
            let value_len = app.form_value(app.form_field).chars().count().min(20) as u16;
            let x = area.x + 14 + value_len;
            let y = area.y + 2 + row as u16;
            if x < area.right() && y < area.bottom() {
                f.set_cursor_position((x, y));
            }
        }
    }
}

fn render_table(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    let transactions = store.transactions();

    if transactions.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add your first one",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Transactions (0) ", theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = transactions
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let is_cursor = i == app.transaction_index;
            let is_editing = store.editing() == Some(txn.id);

            let style = if is_cursor {
                theme::selected_style()
            } else if is_editing {
                Style::default().fg(theme::YELLOW)
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let marker = if is_editing { "*" } else { " " };

            Row::new(vec![
                Cell::from(format!("{marker}{}", txn.date)),
                Cell::from(truncate(&txn.description, 36)),
                Cell::from(txn.category.as_str()),
                Cell::from(format_amount(txn.amount)),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Transactions ({}) ", transactions.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}

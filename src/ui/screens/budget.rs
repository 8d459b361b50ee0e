use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::report;
use crate::store::TransactionStore;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App, store: &TransactionStore) {
    let rows = report::budget_vs_actual(store.transactions(), &app.budgets);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let ratio = if row.limit > Decimal::ZERO {
                (row.actual / row.limit).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };

            let color = if ratio > 0.9 {
                theme::RED
            } else if ratio > 0.7 {
                theme::YELLOW
            } else {
                theme::GREEN
            };

            let name_style = if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let bar = progress_bar(ratio.min(1.0), 24);

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<11}", row.category.as_str()), name_style),
                Span::styled(
                    format!("{:>11} / {:<11}", format_amount(row.actual), format_amount(row.limit)),
                    Style::default().fg(color),
                ),
                Span::styled(bar, Style::default().fg(color)),
                Span::styled(
                    format!(" {:.0}%", ratio * 100.0),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Budget vs Actual ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64) as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

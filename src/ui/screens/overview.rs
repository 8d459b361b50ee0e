use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::report;
use crate::store::TransactionStore;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, _app: &App, store: &TransactionStore) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Total card
            Constraint::Min(8),    // Per-category bar chart
            Constraint::Length(7), // Category share
        ])
        .split(area);

    render_total_card(f, chunks[0], store);
    render_category_chart(f, chunks[1], store);
    render_category_share(f, chunks[2], store);
}

fn render_total_card(f: &mut Frame, area: Rect, store: &TransactionStore) {
    let total = report::total_expenses(store.transactions());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Total Expenses ", theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(total),
            Style::default()
                .fg(theme::RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} transactions", store.transactions().len()),
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, store: &TransactionStore) {
    // Every category gets a bar, zero or not, in enumeration order.
    let totals = report::category_expenses(store.transactions());

    let bars: Vec<Bar> = totals
        .iter()
        .map(|row| {
            Bar::default()
                .value(row.total.round().to_u64().unwrap_or(0))
                .label(Line::from(row.category.as_str()))
                .style(Style::default().fg(theme::ACCENT))
                .value_style(
                    Style::default()
                        .fg(theme::TEXT)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style())
                .title(Span::styled(" Spending by Category ", theme::title_style())),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme::ACCENT))
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}

fn render_category_share(f: &mut Frame, area: Rect, store: &TransactionStore) {
    let totals = report::category_expenses(store.transactions());
    let grand_total = report::total_expenses(store.transactions());

    let items: Vec<ListItem> = totals
        .iter()
        .map(|row| {
            let share = if grand_total > Decimal::ZERO {
                (row.total / grand_total).to_f64().unwrap_or(0.0)
            } else {
                0.0
            };
            let bar = share_bar(share, 20);

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<11}", row.category.as_str()), theme::normal_style()),
                Span::styled(format!("{:>12} ", format_amount(row.total)), theme::normal_style()),
                Span::styled(bar, Style::default().fg(theme::ACCENT)),
                Span::styled(
                    format!(" {:.0}%", share * 100.0),
                    Style::default().fg(theme::TEXT_DIM),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Category Breakdown ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn share_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

//! Bar chart of spending by category
//!
//! `draw_category_chart` renders onto any ratatui frame; `TerminalChart`
//! shows it full screen and blocks until a key is pressed.

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::error::{TrackerError, TrackerResult};
use crate::reports::CategoryTotal;

use super::terminal::{init_terminal, restore_terminal};

pub const CHART_TITLE: &str = "Expenses by Category";
pub const X_AXIS_LABEL: &str = "Category";
pub const Y_AXIS_LABEL: &str = "Total Spending";

/// Something that can present the per-category totals to the user
pub trait ChartRenderer {
    /// Show the chart; returns once the user has dismissed it
    fn show(&mut self, totals: &[CategoryTotal], currency: &str) -> TrackerResult<()>;
}

/// Modal full-screen chart in the current terminal
#[derive(Debug, Default)]
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn show(&mut self, totals: &[CategoryTotal], currency: &str) -> TrackerResult<()> {
        let mut terminal = init_terminal()?;
        let result = run_until_key(&mut terminal, totals, currency);
        restore_terminal()?;
        result
    }
}

fn run_until_key(
    terminal: &mut super::terminal::Tui,
    totals: &[CategoryTotal],
    currency: &str,
) -> TrackerResult<()> {
    loop {
        terminal
            .draw(|frame| draw_category_chart(frame, totals, currency))
            .map_err(|e| TrackerError::Tui(e.to_string()))?;

        // Resizes fall through and redraw
        match event::read().map_err(|e| TrackerError::Tui(e.to_string()))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            _ => {}
        }
    }
}

/// Height of a bar; negative totals draw as empty bars
fn bar_value(total: &CategoryTotal) -> u64 {
    u64::try_from(total.total.cents()).unwrap_or(0)
}

/// Render the chart into the whole frame
pub fn draw_category_chart(frame: &mut Frame<'_>, totals: &[CategoryTotal], currency: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    let bars: Vec<Bar> = totals
        .iter()
        .map(|t| {
            Bar::default()
                .label(Line::from(t.category.clone()))
                .value(bar_value(t))
                .text_value(t.total.format_with_symbol(currency))
        })
        .collect();

    let label_width = totals
        .iter()
        .map(|t| {
            t.category
                .chars()
                .count()
                .max(t.total.format_with_symbol(currency).chars().count())
        })
        .max()
        .unwrap_or(1);
    let bar_width = u16::try_from(label_width).unwrap_or(u16::MAX).clamp(3, 16);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(CHART_TITLE).centered())
        .title_bottom(Line::from(X_AXIS_LABEL).centered())
        .title(Line::from(format!("{} ({})", Y_AXIS_LABEL, currency.trim())).left_aligned());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(chart, chunks[0]);
    frame.render_widget(
        Paragraph::new("Press any key to close").style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

//! Terminal graphics for the expense tracker
//!
//! The graphical summary is a ratatui bar chart drawn on the alternate
//! screen with crossterm.

pub mod chart;
pub mod terminal;

pub use chart::{draw_category_chart, ChartRenderer, TerminalChart};

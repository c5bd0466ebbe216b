//! UI Components
//!
//! Reusable Leptos components.

mod activity_chart;
mod breadcrumb;
mod card_stack;
mod kanban_board;
mod log_panel;
mod section_tab_bar;
mod sliding_text_button;
mod terminal_mock;
mod theme_toggle;

pub use activity_chart::ActivityChart;
pub use breadcrumb::Breadcrumb;
pub use card_stack::CardStack;
pub use kanban_board::KanbanBoard;
pub use log_panel::LogPanel;
pub use section_tab_bar::SectionTabBar;
pub use sliding_text_button::SlidingTextButton;
pub use terminal_mock::{TerminalFrame, TerminalMock};
pub use theme_toggle::ThemeToggle;

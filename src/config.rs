//! Catalog Configuration
//!
//! Seed data and tuning knobs, shipped as `assets/catalog.json` and parsed
//! once at startup. Missing fields fall back to the built-in defaults.

use std::fmt;

use leptos_dragdrop::{has_unique_ids, Identified};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::models::{kanban, stack_card, ActivityPoint, CardStatus, KanbanCard, StackCard};
use crate::stack::StackConfig;

/// Configuration embedded in the binary
pub const EMBEDDED_CONFIG: &str = include_str!("../assets/catalog.json");

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    DuplicateId(&'static str),
    InvalidStack(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::DuplicateId(collection) => write!(f, "Duplicate id in {}", collection),
            ConfigError::InvalidStack(msg) => write!(f, "Invalid stack settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub stack: StackConfig,
    /// Kanban board seed, top to bottom
    pub board: Vec<KanbanCard>,
    /// Card stack seed, top card first
    pub cards: Vec<StackCard>,
    pub activity: Vec<ActivityPoint>,
    /// Script typed by the terminal mock
    pub terminal: Vec<String>,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stack: StackConfig::default(),
            board: vec![
                kanban("design-tokens", "Define design tokens", CardStatus::Done),
                kanban("card-stack", "Build card stack", CardStatus::Review),
                kanban("kanban-dnd", "Drag and drop for the board", CardStatus::InProgress),
                kanban("activity-chart", "Activity chart widget", CardStatus::Todo),
                kanban("login-page", "Login page template", CardStatus::Todo),
            ],
            cards: vec![
                stack_card("c1", "Ada Park", "Frontend lead", "This stack is **the** way to show testimonials."),
                stack_card("c2", "Luis Ortega", "Product designer", "Click the stack to %b%expand%b% it."),
                stack_card("c3", "Mina Sato", "Engineer", "Only the top **three** cards are visible when collapsed."),
                stack_card("c4", "Ravi Iyer", "QA", "Hidden until the stack expands."),
            ],
            activity: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .zip([12.0, 19.0, 7.0, 23.0, 16.0, 4.0, 9.0])
                .map(|(label, value)| ActivityPoint { label: label.to_string(), value })
                .collect(),
            terminal: vec![
                "$ trunk serve".to_string(),
                "Compiling ui-catalog".to_string(),
                "Serving on http://127.0.0.1:8080".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

fn check_unique<T: Identified>(items: &[T], collection: &'static str) -> Result<(), ConfigError> {
    if has_unique_ids(items) {
        Ok(())
    } else {
        Err(ConfigError::DuplicateId(collection))
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_unique(&self.board, "board")?;
        check_unique(&self.cards, "cards")?;

        let StackConfig { offset, scale_factor } = self.stack;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::InvalidStack(format!("offset {} must be >= 0", offset)));
        }
        if !(0.0..1.0).contains(&scale_factor) {
            return Err(ConfigError::InvalidStack(format!("scale_factor {} must be in [0, 1)", scale_factor)));
        }
        Ok(())
    }

    /// Log level, `info` when the name is not recognised
    pub fn log_filter(&self) -> LevelFilter {
        rolling_logger::parse_level(&self.log_level).unwrap_or(LevelFilter::INFO)
    }
}

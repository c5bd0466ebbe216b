//! Catalog Models
//!
//! Payloads carried by the sortable board and the card stack. Core logic
//! only ever looks at `id`; everything else is passed through to rendering.

use leptos_dragdrop::Identified;
use serde::{Deserialize, Serialize};

/// Column a kanban card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl CardStatus {
    pub fn label(self) -> &'static str {
        match self {
            CardStatus::Todo => "To do",
            CardStatus::InProgress => "In progress",
            CardStatus::Review => "In review",
            CardStatus::Done => "Done",
        }
    }

    /// CSS modifier for the status badge
    pub fn class(self) -> &'static str {
        match self {
            CardStatus::Todo => "status-todo",
            CardStatus::InProgress => "status-in-progress",
            CardStatus::Review => "status-review",
            CardStatus::Done => "status-done",
        }
    }
}

/// Kanban card on the dashboard board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KanbanCard {
    pub id: String,
    pub title: String,
    pub status: CardStatus,
}

impl Identified for KanbanCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Testimonial-style card in the stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackCard {
    pub id: String,
    pub name: String,
    pub designation: String,
    /// Inline markdown
    pub content: String,
}

impl Identified for StackCard {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One bar of the activity chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPoint {
    pub label: String,
    pub value: f64,
}

pub(crate) fn kanban(id: &str, title: &str, status: CardStatus) -> KanbanCard {
    KanbanCard {
        id: id.to_string(),
        title: title.to_string(),
        status,
    }
}

pub(crate) fn stack_card(id: &str, name: &str, designation: &str, content: &str) -> StackCard {
    StackCard {
        id: id.to_string(),
        name: name.to_string(),
        designation: designation.to_string(),
        content: content.to_string(),
    }
}

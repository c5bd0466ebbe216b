//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Color theme. Not persisted; the initial value follows the OS preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Read `prefers-color-scheme` from the browser
    pub fn preferred() -> Self {
        let dark = window()
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        if dark { Theme::Dark } else { Theme::Light }
    }
}

/// Catalog sections shown as tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Dashboard,
    CardStack,
    Primitives,
    Log,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Dashboard, Section::CardStack, Section::Primitives, Section::Log];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::CardStack => "Card stack",
            Section::Primitives => "Primitives",
            Section::Log => "Activity log",
        }
    }

    /// Path shown in the header breadcrumb
    pub fn path(self) -> &'static str {
        match self {
            Section::Dashboard => "/catalog/dashboard",
            Section::CardStack => "/catalog/animated/card-stack",
            Section::Primitives => "/catalog/primitives",
            Section::Log => "/catalog/activity-log",
        }
    }
}

/// App-wide UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub theme: Theme,
    pub section: Section,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

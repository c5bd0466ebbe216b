//! Card Stack Geometry
//!
//! Target position, scale, depth and opacity for each card, derived only
//! from its index, the card count, the configuration and the mode. The
//! browser interpolates between targets with a CSS transition.

use serde::Deserialize;

/// Only the top cards of a collapsed stack are visible
pub const VISIBLE_CARDS: usize = 3;

/// Duration of the collapse/expand transition, seconds
pub const TRANSITION_SECS: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Vertical pixel step between stacked cards
    pub offset: f64,
    /// Scale decrement per level
    pub scale_factor: f64,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            offset: 10.0,
            scale_factor: 0.06,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub top: f64,
    pub scale: f64,
    pub z_index: usize,
    pub opacity: f64,
}

impl CardGeometry {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Inline style for an absolutely positioned card
    pub fn style(&self) -> String {
        format!(
            "top: {}px; transform: scale({}); z-index: {}; opacity: {}; transition: all {}s ease-in-out;",
            self.top, self.scale, self.z_index, self.opacity, TRANSITION_SECS
        )
    }
}

/// Geometry of card `index` (0 = top of stack) out of `count`
pub fn card_geometry(index: usize, count: usize, config: &StackConfig, expanded: bool) -> CardGeometry {
    let z_index = count.saturating_sub(index);
    if expanded {
        return CardGeometry {
            top: 0.0,
            scale: 1.0,
            z_index,
            opacity: 1.0,
        };
    }

    let i = index as f64;
    CardGeometry {
        top: i * config.offset,
        scale: 1.0 - i * config.scale_factor,
        z_index,
        opacity: if index >= VISIBLE_CARDS { 0.0 } else { 1.0 },
    }
}

/// Geometry for every card in order
pub fn stack_layout(count: usize, config: &StackConfig, expanded: bool) -> Vec<CardGeometry> {
    (0..count)
        .map(|i| card_geometry(i, count, config, expanded))
        .collect()
}

/// Bottom padding a collapsed stack needs to keep its offset cards in flow.
/// Zero for an empty stack, which renders nothing.
pub fn collapsed_padding(count: usize, config: &StackConfig) -> f64 {
    config.offset * count.min(VISIBLE_CARDS).saturating_sub(1) as f64
}

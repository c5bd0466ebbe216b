//! Leptos DragDrop Utilities
//!
//! Sortable lists for Leptos using mouse and keyboard events.
//!
//! - [`sortable`]: ordered collection and the array-move commit
//! - [`session`]: drag state machine (idle, pending, dragging)
//! - [`sensor`]: pointer and keyboard target resolution (closest center)
//! - [`signals`]: per-instance Leptos signals and DOM handlers

pub mod sensor;
pub mod session;
pub mod signals;
pub mod sortable;

pub use sensor::{closest_center, key_command, DropArea, KeyCommand, KeyboardMove, KeyboardSensor, PointerSensor, Rect, Sensor, Slot};
pub use session::{DragSession, DragState, Point, SensorKind, Track, DRAG_THRESHOLD_PX};
pub use signals::{measure_drop_area, Sortable, SLOT_ATTR};
pub use sortable::{array_move, has_unique_ids, DropOutcome, Identified, NoOpReason, OrderedList, SortError};

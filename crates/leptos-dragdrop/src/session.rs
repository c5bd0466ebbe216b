//! Drag Session State Machine
//!
//! Idle -> Pending (pointer pressed) -> Dragging -> Idle.
//! Keyboard grabs skip Pending. Only `release` hands a session to the
//! commit step; every other transition is preview-only.

/// Movement threshold in pixels before a pressed pointer starts dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Which input device drives a session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Pointer,
    Keyboard,
}

/// Ephemeral state of one active drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub active_id: String,
    pub over_id: Option<String>,
    /// Where the pointer was pressed
    pub origin: Point,
    /// Latest pointer position (equals `origin` for keyboard sessions)
    pub pointer: Point,
    pub sensor: SensorKind,
}

impl DragSession {
    /// Translation of the detached item relative to where it was grabbed
    pub fn offset(&self) -> Point {
        Point::new(self.pointer.x - self.origin.x, self.pointer.y - self.origin.y)
    }
}

/// Result of feeding a pointer position to the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    Ignored,
    /// Pending press crossed the threshold
    Started,
    Moved,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// Pointer pressed on an item but not moved far enough yet
    Pending { id: String, origin: Point },
    Dragging(DragSession),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.session().is_some_and(|s| s.active_id == id)
    }

    pub fn is_over(&self, id: &str) -> bool {
        self.session()
            .is_some_and(|s| s.active_id != id && s.over_id.as_deref() == Some(id))
    }

    /// Pointer pressed on `id` in a list of `len` items
    pub fn press(&mut self, id: &str, origin: Point, len: usize) -> bool {
        if !self.is_idle() || len < 2 {
            return false;
        }
        *self = DragState::Pending { id: id.to_string(), origin };
        true
    }

    /// Feed a pointer position. Starts the drag once the threshold is crossed.
    pub fn track(&mut self, pointer: Point) -> Track {
        match self {
            DragState::Pending { id, origin } => {
                let dx = (pointer.x - origin.x).abs();
                let dy = (pointer.y - origin.y).abs();
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    let session = DragSession {
                        active_id: std::mem::take(id),
                        over_id: None,
                        origin: *origin,
                        pointer,
                        sensor: SensorKind::Pointer,
                    };
                    *self = DragState::Dragging(session);
                    Track::Started
                } else {
                    Track::Ignored
                }
            }
            DragState::Dragging(session) if session.sensor == SensorKind::Pointer => {
                session.pointer = pointer;
                Track::Moved
            }
            _ => Track::Ignored,
        }
    }

    /// Keyboard grab of `id`; the initial target is the item itself
    pub fn grab(&mut self, id: &str, len: usize) -> bool {
        if !self.is_idle() || len < 2 {
            return false;
        }
        *self = DragState::Dragging(DragSession {
            active_id: id.to_string(),
            over_id: Some(id.to_string()),
            origin: Point::default(),
            pointer: Point::default(),
            sensor: SensorKind::Keyboard,
        });
        true
    }

    /// Update the current target. Returns true when it changed.
    pub fn set_over(&mut self, over_id: Option<String>) -> bool {
        match self {
            DragState::Dragging(session) if session.over_id != over_id => {
                session.over_id = over_id;
                true
            }
            _ => false,
        }
    }

    /// End the interaction, handing back the session if a drag was active
    pub fn release(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            DragState::Dragging(session) => Some(session),
            _ => None,
        }
    }

    /// Discard any interaction. Returns true if a drag was active.
    pub fn cancel(&mut self) -> bool {
        self.release().is_some()
    }
}

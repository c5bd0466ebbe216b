//! Leptos Bindings
//!
//! Wires DOM mouse and keyboard events to a [`Sortable`] list instance.
//! Every instance owns its own signals and window listeners, so several
//! lists can live on one page.

use std::time::Duration;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use tracing::{debug, info};
use wasm_bindgen::JsCast;

use crate::sensor::{key_command, DropArea, KeyCommand, KeyboardSensor, PointerSensor, Rect, Sensor, Slot};
use crate::session::{DragSession, DragState, Point, SensorKind, Track};
use crate::sortable::{DropOutcome, Identified, NoOpReason, OrderedList};

/// Attribute carrying the item id on each measured slot element.
///
/// Put it on a wrapper that is never transformed; the detached card inside
/// moves with the pointer while the wrapper keeps its committed position.
pub const SLOT_ATTR: &str = "data-sortable-id";

/// Committed collection plus the drag state driving it
pub struct Sortable<T: Send + Sync + 'static> {
    pub items: RwSignal<OrderedList<T>>,
    pub state: RwSignal<DragState>,
    /// True for a moment after a drag ends, so the trailing click can be ignored
    pub drag_just_ended: RwSignal<bool>,
    /// List container; its bounds are the droppable region
    pub container: NodeRef<html::Div>,
}

impl<T: Send + Sync + 'static> Clone for Sortable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Sortable<T> {}

fn to_rect(r: &web_sys::DomRect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Measure the container and every slot element inside it, in DOM order
pub fn measure_drop_area(container: &web_sys::Element) -> DropArea {
    let bounds = to_rect(&container.get_bounding_client_rect());
    let mut slots = Vec::new();

    if let Ok(nodes) = container.query_selector_all(&format!("[{}]", SLOT_ATTR)) {
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            if let Some(id) = el.get_attribute(SLOT_ATTR) {
                slots.push(Slot { id, rect: to_rect(&el.get_bounding_client_rect()) });
            }
        }
    }

    DropArea { bounds, slots }
}

impl<T: Identified + Send + Sync + 'static> Sortable<T> {
    /// Create the signals for one list instance. Call inside a component.
    pub fn new(seed: Vec<T>) -> Self {
        Self {
            items: RwSignal::new(OrderedList::new(seed)),
            state: RwSignal::new(DragState::Idle),
            drag_just_ended: RwSignal::new(false),
            container: NodeRef::new(),
        }
    }

    /// Is `id` the detached item? Tracked.
    pub fn is_dragging(&self, id: &str) -> bool {
        self.state.with(|s| s.is_active(id))
    }

    /// Is `id` the current drop target? Tracked.
    pub fn is_drop_target(&self, id: &str) -> bool {
        self.state.with(|s| s.is_over(id))
    }

    /// Pointer translation for the detached item, if `id` is being dragged by pointer. Tracked.
    pub fn drag_offset(&self, id: &str) -> Option<Point> {
        self.state.with(|s| {
            s.session()
                .filter(|session| session.active_id == id && session.sensor == SensorKind::Pointer)
                .map(DragSession::offset)
        })
    }

    fn len(&self) -> usize {
        self.items.with_untracked(|l| l.len())
    }

    fn measure(&self) -> Option<DropArea> {
        self.container.get_untracked().map(|el| measure_drop_area(&el))
    }

    /// Resolve a released session and replace the collection in one update
    pub fn commit(&self, released: Option<DragSession>) -> DropOutcome {
        let mut outcome = DropOutcome::Unchanged(NoOpReason::NoSession);
        self.items.maybe_update(|list| {
            outcome = list.apply_drop(released.as_ref());
            outcome.is_committed()
        });

        match (&outcome, &released) {
            (DropOutcome::Committed { from, to }, Some(session)) => {
                info!(id = %session.active_id, from, to, sensor = ?session.sensor, "reorder committed");
            }
            (DropOutcome::Unchanged(reason), Some(session)) => {
                debug!(id = %session.active_id, ?reason, "drop discarded");
            }
            _ => {}
        }
        outcome
    }

    /// Reset to idle and briefly flag that a drag just ended
    pub fn end_drag(&self) {
        self.state.maybe_update(|s| s.cancel());
        self.drag_just_ended.set(true);

        let flag = self.drag_just_ended;
        set_timeout(move || flag.set(false), Duration::from_millis(100));
    }

    fn retarget(&self, over: Option<String>) {
        let changed = self
            .state
            .try_maybe_update(|s| {
                let changed = s.set_over(over.clone());
                (changed, changed)
            })
            .unwrap_or(false);
        if changed {
            debug!(over = ?over, "drop target changed");
        }
    }

    /// Mousedown on an item: record a pending drag
    pub fn on_mousedown(self, id: String) -> impl Fn(web_sys::MouseEvent) + 'static {
        move |ev: web_sys::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            let origin = Point::new(ev.client_x().into(), ev.client_y().into());
            let len = self.len();
            self.state.maybe_update(|s| s.press(&id, origin, len));
        }
    }

    /// Keydown on a focused item: grab, step, drop
    pub fn on_keydown(self, id: String) -> impl Fn(web_sys::KeyboardEvent) + 'static {
        move |ev: web_sys::KeyboardEvent| {
            let Some(command) = key_command(&ev.key()) else { return };
            let session = self.state.with_untracked(|s| {
                s.session().map(|session| (session.active_id == id, session.sensor))
            });

            match (command, session) {
                (KeyCommand::Activate, None) => {
                    ev.prevent_default();
                    let len = self.len();
                    let grabbed = self
                        .state
                        .try_maybe_update(|s| {
                            let grabbed = s.grab(&id, len);
                            (grabbed, grabbed)
                        })
                        .unwrap_or(false);
                    if grabbed {
                        debug!(id = %id, sensor = ?SensorKind::Keyboard, "drag started");
                    }
                }
                (KeyCommand::Activate, Some((true, SensorKind::Keyboard))) => {
                    ev.prevent_default();
                    let released = self.state.try_update(|s| s.release()).flatten();
                    self.commit(released);
                    self.end_drag();
                }
                (KeyCommand::Move(step), Some((true, SensorKind::Keyboard))) => {
                    ev.prevent_default();
                    let Some(area) = self.measure() else { return };
                    let over = self.state.with_untracked(|s| {
                        s.session().and_then(|session| KeyboardSensor.resolve(&step, session, &area))
                    });
                    if over.is_some() {
                        self.retarget(over);
                    }
                }
                // Escape is handled by the window listener
                _ => {}
            }
        }
    }

    /// Bind window-level pointer and Escape listeners for this instance.
    /// Listeners are removed when the owning component is cleaned up.
    pub fn bind(self) {
        let on_move = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
            if self.state.with_untracked(DragState::is_idle) {
                return;
            }
            let pointer = Point::new(ev.client_x().into(), ev.client_y().into());
            let track = self
                .state
                .try_maybe_update(|s| {
                    let track = s.track(pointer);
                    (track != Track::Ignored, track)
                })
                .unwrap_or(Track::Ignored);

            if track == Track::Ignored {
                return;
            }
            if track == Track::Started {
                if let Some(session) = self.state.with_untracked(|s| s.session().cloned()) {
                    debug!(id = %session.active_id, sensor = ?PointerSensor.kind(), "drag started");
                }
            }

            let Some(area) = self.measure() else { return };
            let over = self.state.with_untracked(|s| {
                s.session().and_then(|session| PointerSensor.resolve(&pointer, session, &area))
            });
            self.retarget(over);
        });

        let on_up = window_event_listener(ev::mouseup, move |ev: web_sys::MouseEvent| {
            if self.state.with_untracked(DragState::is_idle) {
                return;
            }
            // Only pointer sessions end on mouseup
            let keyboard = self
                .state
                .with_untracked(|s| s.session().is_some_and(|session| session.sensor == SensorKind::Keyboard));
            if keyboard {
                return;
            }
            // The release position decides the target, not the last mousemove
            let at = Point::new(ev.client_x().into(), ev.client_y().into());
            let area = self.measure();
            let released = self
                .state
                .try_update(|s| match &area {
                    Some(area) => PointerSensor.release(s, at, area),
                    None => s.release(),
                })
                .flatten();
            if released.is_some() {
                self.commit(released);
                self.end_drag();
            }
            // Not dragging: a plain click, let it fire naturally
        });

        let on_escape = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
            if key_command(&ev.key()) != Some(KeyCommand::Cancel) {
                return;
            }
            if self.state.with_untracked(DragState::is_idle) {
                return;
            }
            debug!("drag cancelled");
            self.end_drag();
        });

        on_cleanup(move || {
            on_move.remove();
            on_up.remove();
            on_escape.remove();
        });
    }
}

//! Input Sensors
//!
//! Pointer and keyboard input both resolve to a target id with the same
//! closest-center rule, so equivalent gestures reorder identically.

use crate::session::{DragSession, DragState, Point, SensorKind};

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left
            && p.x <= self.left + self.width
            && p.y >= self.top
            && p.y <= self.top + self.height
    }
}

/// Measured position of one item, in collection order
#[derive(Clone, Debug, PartialEq)]
pub struct Slot {
    pub id: String,
    pub rect: Rect,
}

/// Everything a sensor may drop onto
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DropArea {
    /// Outer bounds of the list; releasing outside cancels
    pub bounds: Rect,
    pub slots: Vec<Slot>,
}

/// Slot whose center is nearest to `point`. Ties go to the earlier slot.
pub fn closest_center(point: Point, slots: &[Slot]) -> Option<&Slot> {
    let mut best: Option<(&Slot, f64)> = None;
    for slot in slots {
        let d = point.distance_to(slot.rect.center());
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((slot, d));
        }
    }
    best.map(|(slot, _)| slot)
}

/// Input source that steers an active drag
pub trait Sensor {
    type Input;

    fn kind(&self) -> SensorKind;

    /// Id of the slot the session should now target, if any
    fn resolve(&self, input: &Self::Input, session: &DragSession, area: &DropArea) -> Option<String>;
}

/// Mouse/touch pointer: target is the slot nearest the pointer
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSensor;

impl Sensor for PointerSensor {
    type Input = Point;

    fn kind(&self) -> SensorKind {
        SensorKind::Pointer
    }

    fn resolve(&self, pointer: &Point, _session: &DragSession, area: &DropArea) -> Option<String> {
        if !area.bounds.contains(*pointer) {
            return None;
        }
        closest_center(*pointer, &area.slots).map(|slot| slot.id.clone())
    }
}

impl PointerSensor {
    /// End a pointer drag at `at`. The target is resolved again at the
    /// release point, so only where the pointer lets go decides the drop.
    pub fn release(&self, state: &mut DragState, at: Point, area: &DropArea) -> Option<DragSession> {
        if let Some(over) = state.session().map(|session| self.resolve(&at, session, area)) {
            state.set_over(over);
        }
        state.release()
    }
}

/// Direction of a keyboard step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardMove {
    Previous,
    Next,
}

/// Arrow keys step the target one slot; the step lands on the neighbour's
/// center and goes through [`closest_center`] like a pointer would.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardSensor;

impl Sensor for KeyboardSensor {
    type Input = KeyboardMove;

    fn kind(&self) -> SensorKind {
        SensorKind::Keyboard
    }

    fn resolve(&self, step: &KeyboardMove, session: &DragSession, area: &DropArea) -> Option<String> {
        let current = session.over_id.as_deref().unwrap_or(&session.active_id);
        let index = area.slots.iter().position(|s| s.id == current)?;
        let target = match step {
            KeyboardMove::Previous => index.saturating_sub(1),
            KeyboardMove::Next => (index + 1).min(area.slots.len() - 1),
        };
        let point = area.slots[target].rect.center();
        closest_center(point, &area.slots).map(|slot| slot.id.clone())
    }
}

/// What a key press means to a sortable item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Grab when idle, drop when dragging
    Activate,
    Move(KeyboardMove),
    Cancel,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn key_command(key: &str) -> Option<KeyCommand> {
    match key {
        " " | "Enter" => Some(KeyCommand::Activate),
        "ArrowUp" | "ArrowLeft" => Some(KeyCommand::Move(KeyboardMove::Previous)),
        "ArrowDown" | "ArrowRight" => Some(KeyCommand::Move(KeyboardMove::Next)),
        "Escape" => Some(KeyCommand::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sortable::{DropOutcome, Identified, NoOpReason, OrderedList};

    #[derive(Debug, Clone, PartialEq)]
    struct Row(String);

    impl Identified for Row {
        fn id(&self) -> &str {
            &self.0
        }
    }

    /// Vertical list: each row 40px tall, 300px wide, 10px apart
    fn area(ids: &[&str]) -> DropArea {
        let slots: Vec<Slot> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Slot {
                id: id.to_string(),
                rect: Rect::new(0.0, i as f64 * 50.0, 300.0, 40.0),
            })
            .collect();
        DropArea {
            bounds: Rect::new(0.0, 0.0, 300.0, ids.len() as f64 * 50.0),
            slots,
        }
    }

    fn list(ids: &[&str]) -> OrderedList<Row> {
        OrderedList::new(ids.iter().map(|id| Row(id.to_string())).collect())
    }

    /// Drag `id` with the pointer and release at `at`
    fn pointer_drop(list: &mut OrderedList<Row>, id: &str, at: Point) -> DropOutcome {
        let area = area(&list.ids());
        let origin = area.slots[list.index_of(id).unwrap()].rect.center();
        let mut state = DragState::Idle;
        state.press(id, origin, list.len());
        state.track(at);
        let released = PointerSensor.release(&mut state, at, &area);
        list.apply_drop(released.as_ref())
    }

    /// Grab `id` from the keyboard, press the arrow `steps` times, drop
    fn keyboard_drop(list: &mut OrderedList<Row>, id: &str, step: KeyboardMove, steps: usize) -> DropOutcome {
        let area = area(&list.ids());
        let mut state = DragState::Idle;
        state.grab(id, list.len());
        for _ in 0..steps {
            let over = KeyboardSensor.resolve(&step, state.session().unwrap(), &area);
            state.set_over(over);
        }
        list.apply_drop(state.release().as_ref())
    }

    #[test]
    fn test_closest_center() {
        let a = area(&["a", "b", "c"]);
        assert_eq!(closest_center(Point::new(10.0, 0.0), &a.slots).unwrap().id, "a");
        assert_eq!(closest_center(Point::new(150.0, 68.0), &a.slots).unwrap().id, "b");
        assert_eq!(closest_center(Point::new(150.0, 500.0), &a.slots).unwrap().id, "c");
        // Exactly between b (center 70) and c (center 120): earlier slot wins
        assert_eq!(closest_center(Point::new(150.0, 95.0), &a.slots).unwrap().id, "b");
        assert!(closest_center(Point::default(), &[]).is_none());
    }

    #[test]
    fn test_pointer_outside_bounds_has_no_target() {
        let a = area(&["a", "b"]);
        let mut state = DragState::Idle;
        state.grab("a", 2);
        let session = state.session().unwrap();
        assert_eq!(PointerSensor.resolve(&Point::new(-20.0, 10.0), session, &a), None);
        assert_eq!(PointerSensor.resolve(&Point::new(150.0, 400.0), session, &a), None);
        assert_eq!(PointerSensor.resolve(&Point::new(150.0, 60.0), session, &a).as_deref(), Some("b"));
    }

    #[test]
    fn test_keyboard_steps_clamp_at_ends() {
        let a = area(&["a", "b", "c"]);
        let mut state = DragState::Idle;
        state.grab("b", 3);

        let up = KeyboardSensor.resolve(&KeyboardMove::Previous, state.session().unwrap(), &a);
        assert_eq!(up.as_deref(), Some("a"));
        state.set_over(up);
        let up = KeyboardSensor.resolve(&KeyboardMove::Previous, state.session().unwrap(), &a);
        assert_eq!(up.as_deref(), Some("a"));

        state.set_over(Some("c".into()));
        let down = KeyboardSensor.resolve(&KeyboardMove::Next, state.session().unwrap(), &a);
        assert_eq!(down.as_deref(), Some("c"));
    }

    #[test]
    fn test_sensors_agree_on_scenario() {
        let seed = ["A", "B", "C", "D", "E"];

        let mut by_pointer = list(&seed);
        let top = area(&seed).slots[0].rect.center();
        assert!(pointer_drop(&mut by_pointer, "C", top).is_committed());
        let second = area(&seed).slots[1].rect.center();
        assert!(pointer_drop(&mut by_pointer, "E", second).is_committed());

        let mut by_keyboard = list(&seed);
        assert!(keyboard_drop(&mut by_keyboard, "C", KeyboardMove::Previous, 2).is_committed());
        assert!(keyboard_drop(&mut by_keyboard, "E", KeyboardMove::Previous, 3).is_committed());

        assert_eq!(by_pointer.ids(), vec!["C", "E", "A", "B", "D"]);
        assert_eq!(by_keyboard.ids(), by_pointer.ids());
    }

    #[test]
    fn test_sensors_agree_on_every_move() {
        let seed = ["a", "b", "c", "d"];
        for from in 0..seed.len() {
            for to in 0..seed.len() {
                if from == to {
                    continue;
                }
                let at = area(&seed).slots[to].rect.center();
                let mut by_pointer = list(&seed);
                pointer_drop(&mut by_pointer, seed[from], at);

                let (step, steps) = if to < from {
                    (KeyboardMove::Previous, from - to)
                } else {
                    (KeyboardMove::Next, to - from)
                };
                let mut by_keyboard = list(&seed);
                keyboard_drop(&mut by_keyboard, seed[from], step, steps);

                assert_eq!(by_pointer.ids(), by_keyboard.ids(), "move {} -> {}", from, to);
                assert_eq!(by_pointer.ids()[to], seed[from]);
            }
        }
    }

    #[test]
    fn test_pointer_moves_never_touch_the_list() {
        let seed = ["a", "b", "c"];
        let mut l = list(&seed);
        let a = area(&seed);
        let mut state = DragState::Idle;
        state.press("a", a.slots[0].rect.center(), l.len());
        for y in (0..150).step_by(7) {
            let p = Point::new(150.0, y as f64);
            state.track(p);
            let over = PointerSensor.resolve(&p, state.session().unwrap(), &a);
            state.set_over(over);

            // Preview only: nothing is released, so nothing can commit
            assert!(state.session().is_some());
            assert_eq!(l.plan_drop(None), DropOutcome::Unchanged(NoOpReason::NoSession));
            assert_eq!(l.apply_drop(None), DropOutcome::Unchanged(NoOpReason::NoSession));
            assert_eq!(l.ids(), seed.to_vec());
        }

        let at = a.slots[2].rect.center();
        let released = PointerSensor.release(&mut state, at, &a);
        assert!(state.is_idle());
        assert_eq!(l.apply_drop(released.as_ref()), DropOutcome::Committed { from: 0, to: 2 });
        assert_eq!(l.ids(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_release_point_decides_the_target() {
        let seed = ["a", "b", "c"];
        let mut l = list(&seed);
        let a = area(&seed);
        let mut state = DragState::Idle;
        state.press("a", a.slots[0].rect.center(), l.len());

        // Last move hovered "c", but the pointer lets go over "b"
        let hover = a.slots[2].rect.center();
        state.track(hover);
        let over = PointerSensor.resolve(&hover, state.session().unwrap(), &a);
        state.set_over(over);
        assert!(state.is_over("c"));

        let released = PointerSensor.release(&mut state, a.slots[1].rect.center(), &a);
        assert_eq!(released.as_ref().and_then(|s| s.over_id.as_deref()), Some("b"));
        assert!(l.apply_drop(released.as_ref()).is_committed());
        assert_eq!(l.ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_release_without_drag_is_nothing() {
        let a = area(&["a", "b"]);
        let mut idle = DragState::Idle;
        assert_eq!(PointerSensor.release(&mut idle, Point::new(10.0, 10.0), &a), None);

        let mut pending = DragState::Idle;
        pending.press("a", a.slots[0].rect.center(), 2);
        assert_eq!(PointerSensor.release(&mut pending, a.slots[1].rect.center(), &a), None);
        assert!(pending.is_idle());
    }

    #[test]
    fn test_release_outside_cancels() {
        let mut l = list(&["a", "b", "c"]);
        let outcome = pointer_drop(&mut l, "a", Point::new(900.0, 900.0));
        assert_eq!(outcome, DropOutcome::Unchanged(NoOpReason::NoTarget));
        assert_eq!(l.ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_key_command() {
        assert_eq!(key_command(" "), Some(KeyCommand::Activate));
        assert_eq!(key_command("Enter"), Some(KeyCommand::Activate));
        assert_eq!(key_command("ArrowUp"), Some(KeyCommand::Move(KeyboardMove::Previous)));
        assert_eq!(key_command("ArrowRight"), Some(KeyCommand::Move(KeyboardMove::Next)));
        assert_eq!(key_command("Escape"), Some(KeyCommand::Cancel));
        assert_eq!(key_command("a"), None);
    }
}

//! Pluggable motion strategies
//!
//! A [`Control`] is a queue of [`ControlElement`]s. Exactly one element is
//! active at a time; when it reaches its goal the next one takes over the
//! next time a position is requested. Once the queue is exhausted the control
//! is ended and hands back the position it is given.

use std::collections::{HashMap, VecDeque};

use super::rect::{Rect, Size};
use super::vector::Vector;
use super::EntityId;
use crate::Point;

/// Read access to where other entities currently are
pub trait PositionLookup {
    fn position_of(&self, id: EntityId) -> Option<Point>;
}

/// Entity positions captured at one instant of a tick
#[derive(Debug, Clone, Default)]
pub struct PositionSnapshot {
    positions: HashMap<EntityId, Point>,
}

impl PositionSnapshot {
    pub fn insert(&mut self, id: EntityId, position: Point) {
        self.positions.insert(id, position);
    }
}

impl FromIterator<(EntityId, Point)> for PositionSnapshot {
    fn from_iter<I: IntoIterator<Item = (EntityId, Point)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl PositionLookup for PositionSnapshot {
    fn position_of(&self, id: EntityId) -> Option<Point> {
        self.positions.get(&id).copied()
    }
}

/// Lookup that knows about no entity (particles and other free movers)
pub struct NoTargets;

impl PositionLookup for NoTargets {
    fn position_of(&self, _id: EntityId) -> Option<Point> {
        None
    }
}

/// Directional signal and clamp box of the entity being steered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Steering {
    /// -1, 0 or 1
    pub horizontal: i32,
    /// -1, 0 or 1
    pub vertical: i32,
    pub speed: i32,
    pub bounding_box: Rect,
    pub hitbox: Size,
}

impl Steering {
    fn next_position(&self, current: Point) -> Point {
        let moved = Point::new(
            current.x + self.horizontal * self.speed,
            current.y + self.vertical * self.speed,
        );
        self.bounding_box.clamp_origin(moved, self.hitbox)
    }
}

/// Everything a motion strategy may consult
pub struct ControlContext<'a> {
    pub lookup: &'a dyn PositionLookup,
    pub steering: Option<Steering>,
}

impl ControlContext<'static> {
    /// Context for movers that neither follow nor get steered
    pub fn detached() -> Self {
        Self {
            lookup: &NoTargets,
            steering: None,
        }
    }
}

/// The strategy carried by a [`ControlElement`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Stay put forever
    Hold,
    /// Move by a fixed vector every tick; never finishes
    ConstantDisplacement(Vector),
    /// Head for `destination`, finishing on arrival
    LinearTransition { destination: Point, speed: u32 },
    /// Chase another entity's latest position; never finishes
    Follow { target: EntityId, speed: u32 },
    /// Move by the steering signal, clamped to the steering box
    PlayerDriven,
}

/// Lifecycle of a single element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Idle,
    Active,
    Finished,
}

/// One motion strategy in a [`Control`] queue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlElement {
    motion: Motion,
    state: ElementState,
}

impl ControlElement {
    pub fn new(motion: Motion) -> Self {
        Self {
            motion,
            state: ElementState::Idle,
        }
    }

    pub fn constant_displacement(displacement: Vector) -> Self {
        Self::new(Motion::ConstantDisplacement(displacement))
    }

    pub fn linear_transition(destination: Point, speed: u32) -> Self {
        Self::new(Motion::LinearTransition { destination, speed })
    }

    pub fn follow(target: EntityId, speed: u32) -> Self {
        Self::new(Motion::Follow { target, speed })
    }

    pub fn player_driven() -> Self {
        Self::new(Motion::PlayerDriven)
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn state(&self) -> ElementState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == ElementState::Active
    }

    fn activate(&mut self) {
        if self.state == ElementState::Idle {
            self.state = ElementState::Active;
        }
    }

    /// Advance one tick from `current`
    ///
    /// Inactive elements return `current` unchanged.
    pub fn next_position(&mut self, current: Point, ctx: &ControlContext<'_>) -> Point {
        if !self.is_active() {
            return current;
        }

        match self.motion {
            Motion::Hold => current,
            Motion::ConstantDisplacement(displacement) => displacement.offset(current),
            Motion::LinearTransition { destination, speed } => {
                let (next, arrived) = step_toward(current, destination, speed);
                if arrived {
                    self.state = ElementState::Finished;
                }
                next
            }
            Motion::Follow { target, speed } => match ctx.lookup.position_of(target) {
                Some(target_pos) => step_toward(current, target_pos, speed).0,
                None => current,
            },
            Motion::PlayerDriven => match ctx.steering {
                Some(steering) => steering.next_position(current),
                None => current,
            },
        }
    }
}

/// Move at most `speed` units toward `destination`
///
/// Snaps onto the destination (and reports arrival) when it is within reach.
fn step_toward(current: Point, destination: Point, speed: u32) -> (Point, bool) {
    let displacement = Vector::between(current, destination);
    if displacement.magnitude() <= speed as f64 {
        return (destination, true);
    }
    // magnitude > speed >= 0 here, so the direction always exists
    match displacement.normalize() {
        Ok(direction) => (direction.scale(speed as f64).offset(current), false),
        Err(_) => (destination, true),
    }
}

/// Ordered queue of motion strategies for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    current: Option<ControlElement>,
    queue: VecDeque<ControlElement>,
    ended: bool,
}

impl Default for Control {
    /// A control that holds its entity in place and never ends
    fn default() -> Self {
        Self::single(ControlElement::new(Motion::Hold))
    }
}

impl Control {
    /// Build from an ordered list; an empty list is ended from the start
    pub fn new(elements: impl IntoIterator<Item = ControlElement>) -> Self {
        let mut queue: VecDeque<ControlElement> = elements.into_iter().collect();
        let current = queue.pop_front().map(|mut first| {
            first.activate();
            first
        });
        let ended = current.is_none();
        Self {
            current,
            queue,
            ended,
        }
    }

    pub fn single(element: ControlElement) -> Self {
        Self::new([element])
    }

    #[inline]
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// The element currently driving motion
    pub fn active(&self) -> Option<&ControlElement> {
        self.current.as_ref().filter(|element| element.is_active())
    }

    /// Number of elements still waiting behind the active one
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Position for the next tick
    pub fn next_position(&mut self, current: Point, ctx: &ControlContext<'_>) -> Point {
        if self.ended {
            return current;
        }

        let needs_next = !self.current.is_some_and(|element| element.is_active());
        if needs_next {
            match self.queue.pop_front() {
                Some(mut next) => {
                    next.activate();
                    self.current = Some(next);
                }
                None => {
                    self.ended = true;
                    return current;
                }
            }
        }

        let Some(element) = self.current.as_mut() else {
            self.ended = true;
            return current;
        };
        let next = element.next_position(current, ctx);

        if !element.is_active() && self.queue.is_empty() {
            self.ended = true;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn step(control: &mut Control, from: Point) -> Point {
        control.next_position(from, &ControlContext::detached())
    }

    #[test]
    fn test_empty_control_is_ended() {
        let mut control = Control::new(Vec::<ControlElement>::new());
        assert!(control.is_ended());
        assert_eq!(step(&mut control, Point::new(3, 4)), Point::new(3, 4));
    }

    #[test]
    fn test_default_control_holds_forever() {
        let mut control = Control::default();
        for _ in 0..10 {
            assert_eq!(step(&mut control, Point::new(7, 7)), Point::new(7, 7));
        }
        assert!(!control.is_ended());
    }

    #[test]
    fn test_constant_displacement_never_ends() {
        let mut control = Control::single(ControlElement::constant_displacement(Vector::new(
            15.0, 0.0,
        )));
        let mut pos = Point::ZERO;
        for _ in 0..100 {
            pos = step(&mut control, pos);
        }
        assert_eq!(pos, Point::new(1500, 0));
        assert!(!control.is_ended());
    }

    #[test]
    fn test_linear_transition_snaps_to_destination() {
        let destination = Point::new(10, 0);
        let mut control = Control::single(ControlElement::linear_transition(destination, 3));

        assert_eq!(step(&mut control, Point::ZERO), Point::new(3, 0));
        assert_eq!(step(&mut control, Point::new(3, 0)), Point::new(6, 0));
        assert_eq!(step(&mut control, Point::new(6, 0)), Point::new(9, 0));
        assert!(!control.is_ended());
        // Within reach: lands exactly
        assert_eq!(step(&mut control, Point::new(9, 0)), destination);
        assert!(control.is_ended());
    }

    #[test]
    fn test_second_element_starts_after_first_finishes() {
        let mut control = Control::new([
            ControlElement::linear_transition(Point::new(2, 0), 5),
            ControlElement::linear_transition(Point::new(2, 4), 5),
        ]);
        assert_eq!(step(&mut control, Point::ZERO), Point::new(2, 0));
        assert!(!control.is_ended());
        assert_eq!(control.pending(), 1);

        assert_eq!(step(&mut control, Point::new(2, 0)), Point::new(2, 4));
        assert!(control.is_ended());
        assert!(control.active().is_none());
    }

    #[test]
    fn test_follow_tracks_moving_target() {
        let mut control = Control::new([
            ControlElement::linear_transition(Point::new(100, 0), 50),
            ControlElement::follow(7, 5),
        ]);
        let mut snapshot = PositionSnapshot::default();
        snapshot.insert(7, Point::new(0, 0));

        let ctx = ControlContext {
            lookup: &snapshot,
            steering: None,
        };
        let mut pos = Point::new(200, 0);
        pos = control.next_position(pos, &ctx);
        assert_eq!(pos, Point::new(150, 0));
        pos = control.next_position(pos, &ctx);
        assert_eq!(pos, Point::new(100, 0));

        // Follow takes over and keeps going after reaching the target
        pos = control.next_position(pos, &ctx);
        assert_eq!(pos, Point::new(95, 0));

        let mut snapshot = PositionSnapshot::default();
        snapshot.insert(7, Point::new(95, 3));
        let ctx = ControlContext {
            lookup: &snapshot,
            steering: None,
        };
        pos = control.next_position(pos, &ctx);
        assert_eq!(pos, Point::new(95, 3));
        pos = control.next_position(pos, &ctx);
        assert_eq!(pos, Point::new(95, 3));
        assert!(!control.is_ended());
    }

    #[test]
    fn test_follow_missing_target_holds_position() {
        let mut control = Control::single(ControlElement::follow(42, 5));
        assert_eq!(step(&mut control, Point::new(9, 9)), Point::new(9, 9));
        assert!(!control.is_ended());
    }

    #[test]
    fn test_player_driven_moves_and_clamps() {
        let mut control = Control::single(ControlElement::player_driven());
        let mut steering = Steering {
            horizontal: 1,
            vertical: 0,
            speed: 5,
            bounding_box: Rect::new(0, 0, 200, 200),
            hitbox: Size::square(50),
        };
        let ctx = ControlContext {
            lookup: &NoTargets,
            steering: Some(steering),
        };
        assert_eq!(control.next_position(Point::ZERO, &ctx), Point::new(5, 0));
        assert_eq!(control.next_position(Point::new(148, 0), &ctx), Point::new(150, 0));

        steering.horizontal = -1;
        steering.vertical = -1;
        let ctx = ControlContext {
            lookup: &NoTargets,
            steering: Some(steering),
        };
        assert_eq!(control.next_position(Point::new(2, 60), &ctx), Point::new(0, 55));
    }

    proptest! {
        #[test]
        fn prop_linear_transition_never_overshoots(
            sx in 0i32..1000, sy in 0i32..1000,
            dx in 0i32..1000, dy in 0i32..1000,
            speed in 1u32..40,
        ) {
            let start = Point::new(sx, sy);
            let destination = Point::new(dx, dy);
            let mut element = ControlElement::linear_transition(destination, speed);
            element.activate();
            let before = Vector::between(start, destination).magnitude();
            let next = element.next_position(start, &ControlContext::detached());

            if before <= speed as f64 {
                prop_assert_eq!(next, destination);
                prop_assert_eq!(element.state(), ElementState::Finished);
            } else {
                prop_assert!(next.x >= sx.min(dx) && next.x <= sx.max(dx));
                prop_assert!(next.y >= sy.min(dy) && next.y <= sy.max(dy));
                prop_assert!(Vector::between(next, destination).magnitude() <= before);
                prop_assert!(element.is_active());
            }
        }

        #[test]
        fn prop_ended_control_returns_input(
            legs in prop::collection::vec((0i32..1000, 0i32..1000, 2u32..40), 1..5),
            sx in 0i32..1000, sy in 0i32..1000,
            later in prop::collection::vec((-2000i32..2000, -2000i32..2000), 1..10),
        ) {
            let mut control = Control::new(
                legs.iter()
                    .map(|&(x, y, speed)| ControlElement::linear_transition(Point::new(x, y), speed)),
            );
            let mut pos = Point::new(sx, sy);
            for _ in 0..5000 {
                if control.is_ended() {
                    break;
                }
                pos = step(&mut control, pos);
            }
            prop_assert!(control.is_ended());
            let (lx, ly, _) = legs[legs.len() - 1];
            prop_assert_eq!(pos, Point::new(lx, ly));

            for (x, y) in later {
                let p = Point::new(x, y);
                prop_assert_eq!(step(&mut control, p), p);
                prop_assert!(control.is_ended());
                prop_assert!(control.active().is_none());
            }
        }

        #[test]
        fn prop_linear_transition_always_arrives(
            sx in 0i32..1000, sy in 0i32..1000,
            dx in 0i32..1000, dy in 0i32..1000,
            speed in 2u32..40,
        ) {
            let destination = Point::new(dx, dy);
            let mut control = Control::single(ControlElement::linear_transition(destination, speed));
            let mut pos = Point::new(sx, sy);
            for _ in 0..4000 {
                if control.is_ended() {
                    break;
                }
                pos = step(&mut control, pos);
            }
            prop_assert!(control.is_ended());
            prop_assert_eq!(pos, destination);
        }
    }
}

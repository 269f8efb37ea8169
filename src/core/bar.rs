use super::signal::Signal;
use serde::{Deserialize, Serialize};

/// Tolerance below which two bar values are considered equal.
const BAR_EPSILON: f64 = 1e-9;

/// Snapshot delivered to bar subscribers after every effective change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarChange {
    pub position: f64,
    pub max: f64,
}

/// Bounded progress accumulator used for experience, encumbrance, tasks,
/// quests, and the plot.
///
/// `position` never exceeds `max` and never drops below zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bar {
    position: f64,
    max: f64,
    #[serde(skip)]
    pub change: Signal<BarChange>,
}

impl Bar {
    pub fn new(max: f64) -> Self {
        Self::with_position(max, 0.0)
    }

    pub fn with_position(max: f64, position: f64) -> Self {
        let max = max.max(0.0);
        Self {
            position: position.clamp(0.0, max),
            max,
            change: Signal::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn done(&self) -> bool {
        self.position >= self.max
    }

    /// Fraction complete in `[0, 1]`; an empty bar counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            1.0
        } else {
            self.position / self.max
        }
    }

    /// Replaces both fields. Fires a change only if either value moved.
    pub fn reset(&mut self, max: f64, position: f64) {
        let max = max.max(0.0);
        let position = position.clamp(0.0, max);
        if approx_eq(max, self.max) && approx_eq(position, self.position) {
            return;
        }
        self.max = max;
        self.position = position;
        self.notify();
    }

    pub fn increment(&mut self, delta: f64) {
        self.reposition(self.position + delta);
    }

    pub fn reposition(&mut self, position: f64) {
        let position = position.clamp(0.0, self.max);
        if approx_eq(position, self.position) {
            return;
        }
        self.position = position;
        self.notify();
    }

    /// Re-emits the current state (used after a muted burst).
    pub fn resync(&mut self) {
        self.notify();
    }

    fn notify(&mut self) {
        let event = BarChange {
            position: self.position,
            max: self.max,
        };
        self.change.emit(&event);
    }
}

impl PartialEq for Bar {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position && self.max == other.max
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= BAR_EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting(bar: &mut Bar) -> Rc<RefCell<u32>> {
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        bar.change.connect(move |_| *c.borrow_mut() += 1);
        count
    }

    #[test]
    fn test_done_after_reset() {
        let mut bar = Bar::new(10.0);
        bar.reset(5.0, 5.0);
        assert!(bar.done());
        bar.reset(5.0, 4.0);
        assert!(!bar.done());
    }

    #[test]
    fn test_increment_clamps_to_max() {
        let mut bar = Bar::new(10.0);
        bar.increment(7.5);
        assert_eq!(bar.position(), 7.5);
        bar.increment(100.0);
        assert_eq!(bar.position(), 10.0);
        assert!(bar.done());
    }

    #[test]
    fn test_reposition_never_negative() {
        let mut bar = Bar::new(10.0);
        bar.reposition(-3.0);
        assert_eq!(bar.position(), 0.0);
    }

    #[test]
    fn test_reset_clamps_position() {
        let mut bar = Bar::new(1.0);
        bar.reset(2.0, 9.0);
        assert_eq!(bar.position(), 2.0);
        assert_eq!(bar.max(), 2.0);
    }

    #[test]
    fn test_redundant_reset_is_silent() {
        let mut bar = Bar::new(10.0);
        let count = counting(&mut bar);

        bar.reset(10.0, 0.0);
        assert_eq!(*count.borrow(), 0);

        bar.reset(10.0, 1e-12);
        assert_eq!(*count.borrow(), 0);

        bar.reset(12.0, 0.0);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_increment_at_max_is_silent() {
        let mut bar = Bar::with_position(4.0, 4.0);
        let count = counting(&mut bar);
        bar.increment(1.0);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_change_carries_new_values() {
        let mut bar = Bar::new(8.0);
        let seen = Rc::new(RefCell::new(None));
        let s = Rc::clone(&seen);
        bar.change.connect(move |c| *s.borrow_mut() = Some(*c));

        bar.increment(3.0);
        assert_eq!(
            *seen.borrow(),
            Some(BarChange {
                position: 3.0,
                max: 8.0
            })
        );
    }

    #[test]
    fn test_fraction() {
        let bar = Bar::with_position(4.0, 1.0);
        assert_eq!(bar.fraction(), 0.25);
        assert_eq!(Bar::new(0.0).fraction(), 1.0);
    }
}

//! Single-slot capture and restore of an automaton around minimization.

use log::debug;

use super::automaton::Automaton;
use super::symbol::Symbol;

/// A one-slot holder for a deep copy of an [`Automaton`].
///
/// The slot follows a first-wins policy: once a snapshot is held, further
/// capture requests are ignored until [`restore`](SnapshotSlot::restore)
/// empties the slot again. Because states are addressed by id, cloning the
/// arena preserves sharing topology exactly (two transitions into one
/// state stay two transitions into that one state), so capturing is safe
/// both before and after minimization.
///
/// # Examples
///
/// ```
/// use libdafsa::dafsa::{Automaton, SnapshotSlot};
///
/// let mut automaton = Automaton::new();
/// automaton.insert("cat");
///
/// let mut slot = SnapshotSlot::new();
/// assert!(slot.capture_if_absent(&automaton));
/// automaton.minimize();
///
/// assert!(slot.restore(&mut automaton));
/// assert!(!slot.restore(&mut automaton)); // slot is empty again
/// ```
#[derive(Debug)]
pub struct SnapshotSlot<C: Symbol> {
    held: Option<Automaton<C>>,
}

impl<C: Symbol> SnapshotSlot<C> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        SnapshotSlot { held: None }
    }

    /// Returns true if a snapshot is currently held.
    #[inline]
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Captures a deep copy of `automaton` if the slot is empty.
    ///
    /// Returns whether a snapshot was taken; if one is already held this is
    /// a no-op returning false.
    pub fn capture_if_absent(&mut self, automaton: &Automaton<C>) -> bool {
        if self.held.is_some() {
            return false;
        }
        debug!("captured snapshot of {} state(s)", automaton.state_count());
        self.held = Some(automaton.clone());
        true
    }

    /// Moves the held snapshot back into `automaton` and empties the slot.
    ///
    /// Returns whether anything was restored; with no snapshot held this is
    /// a no-op returning false.
    pub fn restore(&mut self, automaton: &mut Automaton<C>) -> bool {
        match self.held.take() {
            Some(snapshot) => {
                *automaton = snapshot;
                true
            }
            None => false,
        }
    }
}

impl<C: Symbol> Default for SnapshotSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn automaton_from(words: &[&str]) -> Automaton<char> {
        let mut automaton = Automaton::new();
        for &word in words {
            automaton.insert(word);
        }
        automaton
    }

    #[test]
    fn capture_is_first_wins() {
        let automaton = automaton_from(&["x"]);
        let mut slot = SnapshotSlot::new();
        assert!(!slot.is_held());
        assert!(slot.capture_if_absent(&automaton));
        assert!(slot.is_held());
        assert!(!slot.capture_if_absent(&automaton));
    }

    #[test]
    fn restore_round_trips_structurally() {
        let mut automaton = automaton_from(&["x", "y"]);
        let mut slot = SnapshotSlot::new();
        slot.capture_if_absent(&automaton);

        let expected = automaton.clone();
        automaton.minimize();
        assert_ne!(automaton, expected);

        assert!(slot.restore(&mut automaton));
        assert_eq!(automaton, expected);
        assert!(!slot.is_held());
    }

    #[test]
    fn restore_with_empty_slot_is_a_no_op() {
        let mut automaton = automaton_from(&["x"]);
        let before = automaton.clone();
        let mut slot = SnapshotSlot::new();
        assert!(!slot.restore(&mut automaton));
        assert_eq!(automaton, before);
    }

    #[test]
    fn slot_can_capture_again_after_restore() {
        let mut automaton = automaton_from(&["ab", "cb"]);
        let mut slot = SnapshotSlot::new();

        slot.capture_if_absent(&automaton);
        automaton.minimize();
        slot.restore(&mut automaton);

        automaton.insert("db");
        assert!(slot.capture_if_absent(&automaton));
        let expected = automaton.clone();
        automaton.minimize();
        slot.restore(&mut automaton);
        assert_eq!(automaton, expected);
    }

    #[test]
    fn capturing_a_minimized_automaton_preserves_sharing() {
        let mut automaton = automaton_from(&["ab", "cb"]);
        automaton.minimize();
        let shared_before = automaton.root().target('a');
        assert_eq!(shared_before, automaton.root().target('c'));

        let mut slot = SnapshotSlot::new();
        slot.capture_if_absent(&automaton);
        let expected = automaton.clone();
        automaton.insert("e");
        slot.restore(&mut automaton);

        assert_eq!(automaton, expected);
        assert_eq!(automaton.root().target('a'), automaton.root().target('c'));
    }
}

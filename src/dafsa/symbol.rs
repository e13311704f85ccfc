use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as transition labels in an automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store labels by value
/// - `Eq + Ord`: transition lists are kept sorted by label
/// - `Hash`: state signatures are hashed during minimization
/// - `Debug`: debug printing of states and structural log events
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}

/// Arena-backed automaton, states, and word-input conversion.
pub mod automaton;
/// Batch minimization into the minimal DAFSA.
pub(crate) mod minimize;
/// Caller-facing session over one automaton and its snapshot slot.
pub mod session;
/// Single-slot automaton capture and restore.
pub mod snapshot;
/// Trait for types that can serve as transition labels.
pub mod symbol;
/// Compact sorted transition lists.
pub mod transitions;

pub use automaton::{Automaton, IntoWord, State, StateId, Walk, ROOT};
pub use session::Session;
pub use snapshot::SnapshotSlot;
pub use symbol::Symbol;
pub use transitions::{TransitionIter, Transitions};

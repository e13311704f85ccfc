//! # libdafsa
//!
//! Incremental construction, batch minimization, and membership queries for
//! [DAFSAs](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (Deterministic Acyclic Finite-State Automata).
//!
//! Words are inserted one at a time, in any order, growing a prefix tree of
//! states. An explicit [`minimize`](dafsa::Automaton::minimize) step then
//! collapses states with identical future behavior into shared
//! representatives, producing the smallest automaton recognizing the same
//! finite language. A one-slot snapshot taken before the first minimization
//! lets the original trie be restored.
//!
//! ## Features
//!
//! - **Incremental**: no sorted-input requirement; insert in any order and
//!   minimize on demand
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any
//!   type implementing [`Symbol`](dafsa::Symbol)
//! - **Undoable**: minimization snapshots the trie first and
//!   [`restore`](dafsa::Session::restore) brings it back
//! - **Inspectable**: a deterministic depth-first
//!   [`walk`](dafsa::Automaton::walk) enumerates states and labeled edges
//!   for rendering
//!
//! ## Quick Start
//!
//! The simplest entry point is [`Session`](dafsa::Session), which pairs an
//! automaton with its snapshot slot behind a string-facing API:
//!
//! ```
//! use libdafsa::dafsa::Session;
//!
//! let mut session = Session::from_words(["bake", "cake", "fake"]);
//! assert!(session.search("cake"));
//! assert!(!session.search("ake"));
//!
//! let merged = session.minimize();
//! assert!(merged > 0);
//! assert!(session.search("cake")); // language is unchanged
//!
//! session.restore(); // back to the unminimized trie
//! ```
//!
//! ## Generic Usage
//!
//! The automaton itself is generic over the transition label type:
//!
//! ```
//! use libdafsa::dafsa::Automaton;
//!
//! let mut automaton: Automaton<u8> = Automaton::new();
//! automaton.insert(vec![1, 2, 3]);
//! automaton.insert(vec![2, 3]);
//! automaton.minimize();
//!
//! assert!(automaton.accepts([1u8, 2, 3].as_slice()));
//! assert!(!automaton.accepts([1u8, 2].as_slice()));
//! ```

#![warn(missing_docs)]

/// Core DAFSA data structures: automaton, minimizer, snapshot slot, session.
pub mod dafsa;

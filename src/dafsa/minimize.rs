//! Batch minimization of a trie-shaped automaton into the minimal DAFSA.
//!
//! States are grouped by signature (the accepting flag paired with the
//! canonicalized, symbol-sorted transition list) in a single bottom-up
//! pass, then every transition in the arena is rewritten to point at the
//! representative of its target's equivalence class.

use hashbrown::HashMap;
use log::debug;
use smallvec::SmallVec;

use super::automaton::{Automaton, StateId, ROOT};
use super::symbol::Symbol;

/// The equivalence key of a state: its accepting flag plus the sorted list
/// of (symbol, canonical target id) pairs. Two states with equal signatures
/// accept exactly the same continuation words.
#[derive(Hash, PartialEq, Eq)]
struct Signature<C: Symbol> {
    accepting: bool,
    edges: SmallVec<[(C, StateId); 4]>,
}

/// Collapses equivalent states and returns how many were merged away.
///
/// Runs in two passes: the first computes a complete id-to-representative
/// mapping, the second rewrites transitions. A state's transitions are never
/// mutated while its own signature is still pending.
pub(crate) fn minimize<C: Symbol>(automaton: &mut Automaton<C>) -> usize {
    // Children strictly before parents: a state's signature may only be
    // computed once the canonical ids of all its targets are known.
    let order = postorder(automaton);

    let mut register: HashMap<Signature<C>, StateId> = HashMap::new();
    let mut merged: HashMap<StateId, StateId> = HashMap::new();

    for id in order {
        let state = automaton.state(id);
        let edges = state
            .transitions()
            .iter()
            .map(|(symbol, target)| (symbol, canonical(&merged, target)))
            .collect();
        let signature = Signature {
            accepting: state.is_accepting(),
            edges,
        };
        match register.get(&signature) {
            // Later states always redirect to the first-registered
            // representative, keeping the merge order deterministic.
            Some(&representative) => {
                debug!("state {id} is equivalent to state {representative}");
                merged.insert(id, representative);
            }
            None => {
                register.insert(signature, id);
            }
        }
    }

    // The root is processed last and cannot share a signature with one of
    // its own descendants in a finite language.
    debug_assert!(!merged.contains_key(&ROOT));

    if !merged.is_empty() {
        automaton.retarget_transitions(|target| canonical(&merged, target));
    }
    debug!("minimized: {} state(s) merged", merged.len());
    merged.len()
}

/// Resolves a state id to its representative.
///
/// Representatives are never merged themselves, so a single hop suffices.
fn canonical(merged: &HashMap<StateId, StateId>, id: StateId) -> StateId {
    merged.get(&id).copied().unwrap_or(id)
}

/// Iterative postorder over the reachable graph, following transitions in
/// symbol order.
fn postorder<C: Symbol>(automaton: &Automaton<C>) -> Vec<StateId> {
    let mut order = Vec::with_capacity(automaton.state_count());
    let mut visited = vec![false; automaton.state_count()];
    let mut stack: Vec<(StateId, usize)> = vec![(ROOT, 0)];
    visited[ROOT] = true;

    while let Some(frame) = stack.last_mut() {
        let (id, index) = *frame;
        if let Some((_, target)) = automaton.state(id).transitions().get(index) {
            frame.1 += 1;
            if !visited[target] {
                visited[target] = true;
                stack.push((target, 0));
            }
        } else {
            stack.pop();
            order.push(id);
        }
    }
    order
}

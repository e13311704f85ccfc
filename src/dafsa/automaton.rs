use std::fmt;

use hashbrown::HashSet;
use log::debug;
use smallvec::SmallVec;

use super::minimize;
use super::symbol::Symbol;
use super::transitions::Transitions;

/// Identifier of a state in an [`Automaton`] arena.
///
/// A state's id is its index in the arena. Ids are assigned monotonically
/// and never reused; minimization orphans states but never removes them.
pub type StateId = usize;

/// The id of the root state of every automaton.
pub const ROOT: StateId = 0;

/// Trait for types that can be offered as a word to an automaton.
///
/// Implemented for common string and sequence types so that
/// [`Automaton::insert`] and [`Automaton::accepts`] accept them directly
/// without manual conversion.
pub trait IntoWord<C: Symbol> {
    /// Collects this word into a symbol buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: Symbol> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: Symbol> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: Symbol> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// A state in the automaton: an accepting flag plus outgoing transitions.
///
/// States are created during insertion and never mutated once minimization
/// has made them a shared merge target; only the transitions of their
/// parents are redirected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<C: Symbol> {
    accepting: bool,
    transitions: Transitions<C>,
}

impl<C: Symbol> State<C> {
    fn new(accepting: bool) -> Self {
        State {
            accepting,
            transitions: Transitions::None,
        }
    }

    /// True if a word ending at this state is in the language.
    #[inline]
    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Returns the outgoing transitions of this state, sorted by symbol.
    #[inline]
    pub fn transitions(&self) -> &Transitions<C> {
        &self.transitions
    }

    /// Returns the state that symbol's transition leads to, or `None` if no
    /// such transition exists.
    #[inline]
    pub fn target(&self, symbol: C) -> Option<StateId> {
        self.transitions.target(symbol)
    }
}

/// A deterministic acyclic finite-state automaton built by incremental
/// insertion.
///
/// Words are inserted in any order, growing a prefix tree of states held in
/// an id-addressed arena. [`minimize`](Automaton::minimize) collapses states
/// with identical future behavior into shared representatives, producing the
/// smallest automaton recognizing the same language. Merged states become
/// unreachable but stay in the arena, so ids are never reused.
///
/// # Examples
///
/// ```
/// use libdafsa::dafsa::Automaton;
///
/// let mut automaton = Automaton::new();
/// assert!(automaton.insert("cat"));
/// assert!(automaton.insert("cats"));
/// assert!(!automaton.insert("cat")); // already present
///
/// assert!(automaton.accepts("cat"));
/// assert!(!automaton.accepts("ca"));
///
/// automaton.minimize();
/// assert!(automaton.accepts("cats"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton<C: Symbol> {
    states: Vec<State<C>>,
    language: HashSet<Vec<C>>,
}

impl<C: Symbol> Automaton<C> {
    /// Creates an empty automaton recognizing the empty language.
    pub fn new() -> Self {
        Automaton {
            states: vec![State::new(false)],
            language: HashSet::new(),
        }
    }

    /// Returns the root state.
    #[inline]
    pub fn root(&self) -> &State<C> {
        &self.states[ROOT]
    }

    /// Returns the state with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was never assigned by this automaton.
    #[inline]
    pub fn state(&self, id: StateId) -> &State<C> {
        &self.states[id]
    }

    /// Returns the number of states in the arena, reachable or not.
    ///
    /// This doubles as the next fresh id: states are only ever appended.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the number of words in the language.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.language.len()
    }

    /// Inserts a word, returning whether it was newly added.
    ///
    /// Walks the existing prefix, allocates fresh states for the remaining
    /// suffix, and marks the terminal state accepting. Re-inserting a word
    /// that is already present is a no-op beyond the traversal.
    ///
    /// Inserting the empty word marks the root itself accepting. No input
    /// normalization is performed; trimming is a caller concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let mut automaton = Automaton::new();
    /// assert!(automaton.insert("car"));
    /// assert!(!automaton.insert("car"));
    /// assert_eq!(automaton.word_count(), 1);
    /// ```
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();

        let mut current = ROOT;
        let mut depth = 0;
        while depth < word.len() {
            match self.states[current].target(word[depth]) {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => break,
            }
        }

        for &symbol in &word[depth..] {
            let next = self.alloc();
            debug!("created state {next} for symbol {symbol:?}");
            self.states[current].transitions.add(symbol, next);
            current = next;
        }

        if self.states[current].accepting {
            return false;
        }
        self.states[current].accepting = true;
        debug!("marked state {current} as accepting");
        self.language.insert(word.into_vec());
        true
    }

    /// Returns whether the automaton accepts `word`.
    ///
    /// Membership is decided by traversal: starting at the root, consume the
    /// word symbol by symbol, failing as soon as a symbol has no transition,
    /// and accept iff the whole word is consumed at an accepting state. The
    /// empty word is accepted iff the root itself is accepting.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.insert("cat");
    /// assert!(automaton.accepts("cat"));
    /// assert!(!automaton.accepts("cats"));
    /// assert!(!automaton.accepts(""));
    /// ```
    pub fn accepts(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let mut current = ROOT;
        for &symbol in word.iter() {
            match self.states[current].target(symbol) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.states[current].accepting
    }

    /// Rewrites the automaton into the minimal DAFSA recognizing the same
    /// language, returning the number of states merged away.
    ///
    /// Minimization is idempotent: a second consecutive call merges nothing.
    /// The language is unchanged, and merged states are orphaned rather than
    /// removed, so ids stay stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.insert("ab");
    /// automaton.insert("cb");
    ///
    /// assert_eq!(automaton.reachable_count(), 5);
    /// assert_eq!(automaton.minimize(), 2);
    /// assert_eq!(automaton.reachable_count(), 3);
    /// assert_eq!(automaton.minimize(), 0);
    /// ```
    pub fn minimize(&mut self) -> usize {
        minimize::minimize(self)
    }

    /// Returns a depth-first traversal over the reachable states.
    ///
    /// States are yielded in deterministic preorder, following transitions
    /// in symbol order. This is the read-only view consumed by rendering
    /// layers to enumerate nodes and labeled edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.insert("ab");
    /// let ids: Vec<_> = automaton.walk().map(|(id, _)| id).collect();
    /// assert_eq!(ids, [0, 1, 2]);
    /// ```
    pub fn walk(&self) -> Walk<'_, C> {
        Walk {
            automaton: self,
            stack: vec![ROOT],
            visited: vec![false; self.states.len()],
        }
    }

    /// Returns the number of states reachable from the root.
    pub fn reachable_count(&self) -> usize {
        self.walk().count()
    }

    /// Returns the words of the language in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let mut automaton = Automaton::new();
    /// automaton.insert("cat");
    /// automaton.insert("car");
    /// let words: Vec<String> = automaton
    ///     .words()
    ///     .into_iter()
    ///     .map(|w| w.iter().collect())
    ///     .collect();
    /// assert_eq!(words, ["car", "cat"]);
    /// ```
    pub fn words(&self) -> Vec<&[C]> {
        let mut words: Vec<&[C]> = self.language.iter().map(Vec::as_slice).collect();
        words.sort_unstable();
        words
    }

    /// Rewrites every transition target in the arena through `remap`.
    pub(crate) fn retarget_transitions(&mut self, mut remap: impl FnMut(StateId) -> StateId) {
        for state in &mut self.states {
            state.transitions.retarget(&mut remap);
        }
    }

    fn alloc(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State::new(false));
        id
    }
}

impl<C: Symbol> Default for Automaton<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol> fmt::Debug for Automaton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.state_count())
            .field("word_count", &self.word_count())
            .finish()
    }
}

/// A depth-first traversal over the reachable states of an automaton.
///
/// Yields `(id, state)` pairs in deterministic preorder; shared states are
/// visited once.
pub struct Walk<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
    stack: Vec<StateId>,
    visited: Vec<bool>,
}

impl<'a, C: Symbol> Iterator for Walk<'a, C> {
    type Item = (StateId, &'a State<C>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            if self.visited[id] {
                continue;
            }
            self.visited[id] = true;
            let state = &self.automaton.states[id];
            // Reversed so the smallest symbol is expanded first.
            for index in (0..state.transitions.len()).rev() {
                let (_, target) = state.transitions.get(index).unwrap();
                if !self.visited[target] {
                    self.stack.push(target);
                }
            }
            return Some((id, state));
        }
        None
    }
}

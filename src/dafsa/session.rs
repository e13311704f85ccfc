//! Caller-facing layer: a text session over one automaton and its snapshot.

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::automaton::Automaton;
use super::snapshot::SnapshotSlot;

/// A single-automaton editing session with undoable minimization.
///
/// The session owns one [`Automaton`] over `char` and one [`SnapshotSlot`],
/// and exposes the string-facing boundary: insertion, membership search
/// (with whitespace trimming), on-demand minimization, and restoring the
/// automaton to its shape before the first minimization. Each session is
/// fully independent; there is no shared state between sessions.
///
/// # Examples
///
/// ```
/// use libdafsa::dafsa::Session;
///
/// let mut session = Session::new();
/// session.insert("cat");
/// session.insert("cats");
///
/// assert!(session.search(" cat "));
/// session.minimize();
/// assert!(session.search("cats"));
///
/// session.restore();
/// assert!(session.search("cat"));
/// ```
#[derive(Debug)]
pub struct Session {
    automaton: Automaton<char>,
    snapshot: SnapshotSlot<char>,
}

impl Session {
    /// Creates a session over an empty automaton.
    pub fn new() -> Self {
        Session {
            automaton: Automaton::new(),
            snapshot: SnapshotSlot::new(),
        }
    }

    /// Builds a session by inserting every word from an iterator.
    ///
    /// Words may arrive in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Session;
    ///
    /// let session = Session::from_words(["cat", "bat"]);
    /// assert!(session.search("bat"));
    /// assert_eq!(session.language(), ["bat", "cat"]);
    /// ```
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut session = Session::new();
        for word in words {
            session.insert(word.as_ref());
        }
        session
    }

    /// Builds a session from a dictionary file, one word per line.
    ///
    /// Lines starting with `#` are treated as comments and ignored. Blank
    /// lines are skipped, and surrounding whitespace is trimmed from every
    /// word.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libdafsa::dafsa::Session;
    ///
    /// let session = Session::from_file("dictionary.txt").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Session, Box<dyn Error>> {
        let mut session = Session::new();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        // Calling read_line repeatedly lets us reuse the same buffer
        // instead of allocating a new string for every line.
        let mut buf = String::with_capacity(80);
        loop {
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            let word = buf.trim();
            if !word.is_empty() && !is_comment(word) {
                session.insert(word);
            }
            buf.clear();
        }
        Ok(session)
    }

    /// Inserts a string, returning whether it was newly added.
    ///
    /// No normalization is performed; callers are expected to trim and
    /// reject empty input before offering it here.
    pub fn insert(&mut self, string: &str) -> bool {
        self.automaton.insert(string)
    }

    /// Returns whether the language contains `string`.
    ///
    /// Leading and trailing whitespace is trimmed before the automaton is
    /// consulted.
    pub fn search(&self, string: &str) -> bool {
        self.automaton.accepts(string.trim())
    }

    /// Minimizes the automaton, returning the number of states merged away.
    ///
    /// A snapshot is captured first if none is held, so the automaton's
    /// shape immediately before its first minimization (since creation or
    /// since the last restore) can always be brought back with
    /// [`restore`](Session::restore).
    pub fn minimize(&mut self) -> usize {
        self.snapshot.capture_if_absent(&self.automaton);
        self.automaton.minimize()
    }

    /// Restores the automaton held in the snapshot slot, if any.
    ///
    /// Returns whether anything was restored; the slot is emptied, so the
    /// next [`minimize`](Session::minimize) captures a fresh snapshot.
    pub fn restore(&mut self) -> bool {
        self.snapshot.restore(&mut self.automaton)
    }

    /// Returns true if a pre-minimization snapshot is currently held.
    pub fn snapshot_held(&self) -> bool {
        self.snapshot.is_held()
    }

    /// Returns a read-only view of the underlying automaton.
    pub fn automaton(&self) -> &Automaton<char> {
        &self.automaton
    }

    /// Returns the words of the language in sorted order.
    pub fn language(&self) -> Vec<String> {
        self.automaton
            .words()
            .into_iter()
            .map(|word| word.iter().collect())
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn search_trims_surrounding_whitespace() {
        let mut session = Session::new();
        session.insert("cat");
        assert!(session.search("cat"));
        assert!(session.search("  cat"));
        assert!(session.search("cat  "));
        assert!(session.search("\tcat\n"));
        assert!(!session.search("c at"));
    }

    #[test]
    fn search_miss_is_false_not_an_error() {
        let session = Session::new();
        assert!(!session.search("anything"));
        assert!(!session.search(""));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut session = Session::new();
        assert!(session.insert("cat"));
        assert!(!session.insert("cat"));
    }

    #[test]
    fn minimize_captures_a_snapshot_first() {
        let mut session = Session::from_words(["ab", "cb"]);
        assert!(!session.snapshot_held());

        let expected = session.automaton().clone();
        session.minimize();
        assert!(session.snapshot_held());
        assert_ne!(session.automaton(), &expected);

        assert!(session.restore());
        assert_eq!(session.automaton(), &expected);
        assert!(!session.snapshot_held());
    }

    #[test]
    fn snapshot_reflects_the_first_minimization_only() {
        let mut session = Session::from_words(["ab", "cb"]);
        let original = session.automaton().clone();

        session.minimize();
        // Work done after the first capture is not re-captured...
        session.insert("db");
        session.minimize();

        // ...so restore brings back the state before the *first* minimize.
        assert!(session.restore());
        assert_eq!(session.automaton(), &original);
        assert!(!session.search("db"));
    }

    #[test]
    fn restore_without_snapshot_is_a_no_op() {
        let mut session = Session::from_words(["cat"]);
        assert!(!session.restore());
        assert!(session.search("cat"));
    }

    #[test]
    fn second_minimize_merges_nothing() {
        let mut session = Session::from_words(["bake", "cake", "fake"]);
        assert!(session.minimize() > 0);
        assert_eq!(session.minimize(), 0);
    }

    #[test]
    fn language_is_sorted() {
        let session = Session::from_words(["cat", "at", "bat"]);
        assert_eq!(session.language(), ["at", "bat", "cat"]);
    }

    #[test]
    fn loads_words_from_file() {
        let path = std::env::temp_dir().join(format!("dafsa-wordlist-{}.txt", std::process::id()));
        std::fs::write(&path, "# a comment\ncat\n\n  car  \ncats\n").unwrap();
        let session = Session::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(session.language(), ["car", "cat", "cats"]);
        assert!(session.search("car"));
        assert!(!session.search("# a comment"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("dafsa-no-such-file.txt");
        assert!(Session::from_file(&path).is_err());
    }

    #[test]
    fn comment_lines() {
        assert!(is_comment("# this is a comment"));
        assert!(is_comment("   # indented comment"));
        assert!(!is_comment("word"));
        assert!(!is_comment(" word # trailing"));
    }
}

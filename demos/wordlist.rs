//! Example: a tour of a DAFSA session.
//!
//! Builds a session from a small word set, queries membership, minimizes
//! the automaton, prints the reachable states, and restores the original
//! trie. Set `RUST_LOG=debug` to see the structural events.
//!
//! Run with: cargo run --example wordlist

use libdafsa::dafsa::Session;

fn print_states(session: &Session) {
    for (id, state) in session.automaton().walk() {
        let edges: Vec<String> = state
            .transitions()
            .iter()
            .map(|(symbol, target)| format!("{symbol} -> {target}"))
            .collect();
        let accepting = if state.is_accepting() { " (accepting)" } else { "" };
        println!("  {id}{accepting}: [{}]", edges.join(", "));
    }
}

fn main() {
    env_logger::init();

    let mut session = Session::from_words(["BAKE", "BAKED", "CAKE", "CAKED", "FAKE", "LAKE"]);

    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "CAKED", " LAKE ", "MAKE"] {
        let found = if session.search(word) { "yes" } else { "no" };
        println!("  {word}: {found}");
    }

    let before = session.automaton().reachable_count();
    let merged = session.minimize();
    let after = session.automaton().reachable_count();
    println!("\nMinimized: {merged} state(s) merged, {before} reachable states -> {after}");

    println!("\nStates after minimization:");
    print_states(&session);

    println!("\nLanguage: {:?}", session.language());
    for word in ["BAKE", "CAKED", "MAKE"] {
        let found = if session.search(word) { "yes" } else { "no" };
        println!("  {word}: {found}");
    }

    session.restore();
    println!(
        "\nRestored original trie: {} reachable states",
        session.automaton().reachable_count()
    );
}

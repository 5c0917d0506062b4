//! Provides the automaton data model and the simulator used to evaluate a
//! compiled pattern against an input string.
//!
//! An automaton is a graph of [State]s held in a single owning [StateArena]
//! and addressed through [StateId] handles. The [run] function advances a
//! set of active states across the input, one character at a time, and
//! reports whether the automaton consumes the input in full.

use std::fmt::Display;

mod sparse_set;
use sparse_set::SparseSet;

/// An index uniquely identifying a state within its owning arena. State
/// identity is the handle itself; two structurally identical states remain
/// distinct.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateId(usize);

impl StateId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for StateId {
    fn from(idx: usize) -> Self {
        Self(idx)
    }
}

/// Represents a single automaton state: an optional consuming label and up
/// to two outgoing transitions. A label of `None` marks an epsilon state,
/// traversable without consuming input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct State {
    label: Option<char>,
    edges: Vec<StateId>,
}

impl State {
    /// Instantiates a new epsilon state with no outgoing edges. Each state
    /// owns an edge list of its own.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            edges: vec![],
        }
    }

    /// Associates a consuming label, returning the modified state.
    #[must_use]
    pub fn with_label(mut self, label: char) -> Self {
        self.label = Some(label);
        self
    }

    /// Appends an outgoing edge, returning the modified state.
    #[must_use]
    pub fn with_edge(mut self, target: StateId) -> Self {
        self.add_edge_mut(target);
        self
    }

    /// Appends an outgoing edge to the state.
    pub fn add_edge_mut(&mut self, target: StateId) {
        self.edges.push(target);
    }

    /// Returns the label consumed by this state, or `None` for an epsilon
    /// state.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Returns the outgoing edges of the state in insertion order.
    pub fn edges(&self) -> &[StateId] {
        &self.edges
    }
}

/// A sub-automaton exposing exactly one entry and one exit state, the unit
/// of composition during construction. Merging fragments splices edges
/// between existing states rather than copying them; a fragment's accept
/// state carries no outgoing edges until an enclosing construction consumes
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    start: StateId,
    accept: StateId,
}

impl Fragment {
    #[must_use]
    pub fn new(start: StateId, accept: StateId) -> Self {
        Self { start, accept }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }
}

/// The single owning store for every state created during one compilation.
/// States are referred to by [StateId] handles and the whole graph, cycles
/// included, is released when the arena drops.
#[derive(Debug, Default)]
pub struct StateArena {
    states: Vec<State>,
}

impl StateArena {
    /// Inserts a state into the arena, returning its id.
    pub fn insert_state_mut(&mut self, state: State) -> StateId {
        let next_idx = self.states.len();
        self.states.push(state);

        StateId::from(next_idx)
    }

    /// Borrows a state by its id if it exists in the arena.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.as_usize())
    }

    /// Mutably borrows a state by its id if it exists in the arena.
    pub fn state_mut(&mut self, id: StateId) -> Option<&mut State> {
        self.states.get_mut(id.as_usize())
    }

    /// Returns the number of states in the arena.
    pub fn state_cnt(&self) -> usize {
        self.states.len()
    }

    /// Returns an iterator over every state paired with its id.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &State)> {
        self.states
            .iter()
            .enumerate()
            .map(|(idx, state)| (StateId::from(idx), state))
    }
}

impl std::ops::Index<StateId> for StateArena {
    type Output = State;

    fn index(&self, index: StateId) -> &Self::Output {
        &self.states[index.as_usize()]
    }
}

impl std::ops::IndexMut<StateId> for StateArena {
    fn index_mut(&mut self, index: StateId) -> &mut Self::Output {
        &mut self.states[index.as_usize()]
    }
}

/// A compiled automaton: the owning arena plus the start and accept states
/// of the top-level fragment.
#[derive(Debug)]
pub struct Nfa {
    states: StateArena,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    /// Finalizes an arena into an automaton rooted at the given top-level
    /// fragment.
    #[must_use]
    pub fn new(states: StateArena, fragment: Fragment) -> Self {
        Self {
            states,
            start: fragment.start(),
            accept: fragment.accept(),
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Borrows a state by its id if it exists in the automaton.
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.state(id)
    }

    /// Returns the number of states in the automaton.
    pub fn state_cnt(&self) -> usize {
        self.states.state_cnt()
    }
}

impl std::ops::Index<StateId> for Nfa {
    type Output = State;

    fn index(&self, index: StateId) -> &Self::Output {
        &self.states[index]
    }
}

impl Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (id, state) in self.states.states() {
            let targets = state
                .edges()
                .iter()
                .map(|target| format!("{:04}", target.as_usize()))
                .collect::<Vec<_>>()
                .join(", ");

            match state.label() {
                Some(value) => {
                    writeln!(f, "{:04}: Consume {:?} -> [{}]", id.as_usize(), value, targets)?
                }
                None => writeln!(f, "{:04}: Epsilon -> [{}]", id.as_usize(), targets)?,
            }
        }

        Ok(())
    }
}

/// Adds a state to the active set and, for epsilon states, every state
/// reachable from it through epsilon transitions. The set doubles as the
/// visited record, which keeps the walk finite on cyclic graphs.
fn follow_epsilon(nfa: &Nfa, from: StateId, active: &mut SparseSet) {
    // an explicit work-list rather than recursion, keeping deeply nested
    // patterns from exhausting the call stack
    let mut pending = vec![from];

    while let Some(id) = pending.pop() {
        if active.contains(&id.as_usize()) {
            continue;
        }
        active.insert(id.as_usize());

        let state = &nfa[id];
        if state.label().is_none() {
            pending.extend(state.edges().iter().copied());
        }
    }
}

/// Evaluates a compiled automaton against an input, returning true if the
/// automaton consumes the input in full. Matching is anchored at both ends.
///
/// # Example
///
/// ```
/// use thompson_runtime::*;
///
/// // an automaton equivalent to the pattern `a`
/// let mut arena = StateArena::default();
/// let accept = arena.insert_state_mut(State::new());
/// let start = arena.insert_state_mut(State::new().with_label('a').with_edge(accept));
/// let nfa = Nfa::new(arena, Fragment::new(start, accept));
///
/// assert!(run(&nfa, "a"));
/// assert!(!run(&nfa, "aa"));
/// assert!(!run(&nfa, ""));
/// ```
pub fn run(nfa: &Nfa, input: &str) -> bool {
    use core::mem::swap;

    let mut current = SparseSet::new(nfa.state_cnt());
    let mut next = SparseSet::new(nfa.state_cnt());

    follow_epsilon(nfa, nfa.start(), &mut current);

    for value in input.chars() {
        for &id in current.iter() {
            let state = &nfa[StateId::from(id)];

            // only consuming states participate in a step; a consuming
            // state always carries exactly one outgoing edge
            if state.label() == Some(value) {
                if let Some(&target) = state.edges().first() {
                    follow_epsilon(nfa, target, &mut next);
                }
            }
        }

        swap(&mut current, &mut next);
        next.clear();

        if current.is_empty() {
            break;
        }
    }

    current.contains(&nfa.accept().as_usize())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds the automaton for a single literal the way the compiler
    /// would: an epsilon accept state and a consuming start state.
    fn literal_automaton(value: char) -> Nfa {
        let mut arena = StateArena::default();
        let accept = arena.insert_state_mut(State::new());
        let start = arena.insert_state_mut(State::new().with_label(value).with_edge(accept));

        Nfa::new(arena, Fragment::new(start, accept))
    }

    /// Builds the cyclic automaton equivalent to the pattern `b*`.
    fn zero_or_more_automaton(value: char) -> Nfa {
        let mut arena = StateArena::default();

        let inner_accept = arena.insert_state_mut(State::new());
        let inner_start =
            arena.insert_state_mut(State::new().with_label(value).with_edge(inner_accept));

        let accept = arena.insert_state_mut(State::new());
        let start = arena.insert_state_mut(State::new().with_edge(inner_start).with_edge(accept));

        arena[inner_accept].add_edge_mut(inner_start);
        arena[inner_accept].add_edge_mut(accept);

        Nfa::new(arena, Fragment::new(start, accept))
    }

    #[test]
    fn should_mint_distinct_ids_for_identical_states() {
        let mut arena = StateArena::default();

        let first = arena.insert_state_mut(State::new());
        let second = arena.insert_state_mut(State::new());

        assert_ne!(first, second);
        assert_eq!(2, arena.state_cnt());
    }

    #[test]
    fn should_match_only_the_exact_literal_input() {
        let nfa = literal_automaton('a');

        let input_output = vec![("a", true), ("b", false), ("", false), ("aa", false)];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, run(&nfa, input)));
        }
    }

    #[test]
    fn should_terminate_on_cyclic_star_automaton() {
        let nfa = zero_or_more_automaton('b');

        let input_output = vec![
            ("", true),
            ("b", true),
            ("bbbb", true),
            ("x", false),
            ("bx", false),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, run(&nfa, input)));
        }
    }

    #[test]
    fn should_match_empty_input_only_when_accept_is_in_initial_closure() {
        assert!(run(&zero_or_more_automaton('b'), ""));
        assert!(!run(&literal_automaton('b'), ""));
    }

    #[test]
    fn should_activate_both_branches_of_an_alternation() {
        // hand-built equivalent of the pattern `a|b`
        let mut arena = StateArena::default();

        let left_accept = arena.insert_state_mut(State::new());
        let left_start = arena.insert_state_mut(State::new().with_label('a').with_edge(left_accept));
        let right_accept = arena.insert_state_mut(State::new());
        let right_start =
            arena.insert_state_mut(State::new().with_label('b').with_edge(right_accept));

        let accept = arena.insert_state_mut(State::new());
        let start =
            arena.insert_state_mut(State::new().with_edge(left_start).with_edge(right_start));
        arena[left_accept].add_edge_mut(accept);
        arena[right_accept].add_edge_mut(accept);

        let nfa = Nfa::new(arena, Fragment::new(start, accept));

        let input_output = vec![("a", true), ("b", true), ("", false), ("ab", false)];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            assert_eq!((test_id, expected), (test_id, run(&nfa, input)));
        }
    }

    #[test]
    fn should_render_numbered_state_listing() {
        let nfa = literal_automaton('a');

        assert_eq!(
            "0000: Epsilon -> []\n0001: Consume 'a' -> [0000]\n",
            nfa.to_string()
        );
    }
}

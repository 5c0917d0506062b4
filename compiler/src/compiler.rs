//! Provides methods and types to facilitate the compilation of a tokenized
//! pattern into a runtime automaton via Thompson's construction.
//!
//! # Example
//!
//! ```
//! use thompson_compiler::compile;
//! use thompson_runtime::run;
//!
//! let nfa = compile("a.b|b*").expect("failed to compile pattern");
//!
//! assert!(run(&nfa, "ab"));
//! assert!(run(&nfa, "bbbbb"));
//! assert!(!run(&nfa, "bbx"));
//! ```

use super::parser::{self, ParseErr};
use super::postfix::{self, ConversionErr};
use super::token::Token;
use thompson_runtime::{Fragment, Nfa, State, StateArena};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrKind {
    UnbalancedParentheses,
    MalformedPattern,
}

/// Represents a terminal failure while compiling a pattern. No partial
/// automaton is ever returned alongside one.
#[derive(Debug, PartialEq, Eq)]
pub struct CompileErr {
    /// The type of triggered error.
    kind: CompileErrKind,
    /// Additional error data.
    data: Option<String>,
}

impl CompileErr {
    /// Instantiates a new error.
    pub fn new(kind: CompileErrKind) -> Self {
        Self { kind, data: None }
    }

    /// Associates additional data with the error, returning the modified
    /// error.
    pub fn with_data(mut self, data: String) -> Self {
        self.with_data_mut(data);
        self
    }

    /// Associates additional data with the error.
    pub fn with_data_mut(&mut self, data: String) {
        self.data = Some(data);
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> CompileErrKind {
        self.kind
    }
}

impl std::fmt::Display for CompileErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (data, padding) = if let Some(data) = &self.data {
            (data.as_str(), ": ")
        } else {
            ("", "")
        };
        match &self.kind {
            CompileErrKind::UnbalancedParentheses => {
                write!(f, "pattern contains unbalanced parentheses{}{}", padding, data)
            }
            CompileErrKind::MalformedPattern => {
                write!(f, "pattern is malformed{}{}", padding, data)
            }
        }
    }
}

impl From<ConversionErr> for CompileErr {
    fn from(src: ConversionErr) -> Self {
        match src {
            ConversionErr::UnbalancedParentheses => {
                Self::new(CompileErrKind::UnbalancedParentheses)
            }
        }
    }
}

impl From<ParseErr> for CompileErr {
    fn from(src: ParseErr) -> Self {
        Self::new(CompileErrKind::MalformedPattern).with_data(format!("{:?}", src))
    }
}

/// Compiles a pattern into an executable automaton: the surface syntax is
/// tokenized, reordered to postfix and assembled into a single NFA
/// fragment.
///
/// # Example
///
/// ```
/// use thompson_compiler::{compile, CompileErrKind};
///
/// assert!(compile("a.(b|c)*").is_ok());
/// assert_eq!(
///     Some(CompileErrKind::UnbalancedParentheses),
///     compile("(a.b").err().map(|err| err.kind())
/// );
/// ```
pub fn compile(pattern: &str) -> Result<Nfa, CompileErr> {
    let enumerated_pattern = pattern.chars().enumerate().collect::<Vec<(usize, char)>>();

    let tokens = parser::parse(&enumerated_pattern)?;
    let postfix = postfix::shunt(tokens)?;

    build(postfix)
}

/// Compiles a pattern and evaluates it against an input in one step,
/// returning whether the automaton fully matches.
pub fn matches(pattern: &str, input: &str) -> Result<bool, CompileErr> {
    compile(pattern).map(|nfa| thompson_runtime::run(&nfa, input))
}

/// Assembles a postfix token sequence into a single automaton over an
/// explicit fragment stack. Exactly one fragment must remain once every
/// token is consumed.
fn build(postfix: Vec<Token>) -> Result<Nfa, CompileErr> {
    let mut arena = StateArena::default();
    let mut fragments: Vec<Fragment> = vec![];

    for token in postfix {
        let fragment = match token {
            Token::Literal(value) => literal(&mut arena, value),
            Token::Concat => {
                let right = pop_operand(&mut fragments, token)?;
                let left = pop_operand(&mut fragments, token)?;

                concatenation(&mut arena, left, right)
            }
            Token::Alternation => {
                let right = pop_operand(&mut fragments, token)?;
                let left = pop_operand(&mut fragments, token)?;

                alternation(&mut arena, left, right)
            }
            Token::Star => {
                let inner = pop_operand(&mut fragments, token)?;

                kleene_star(&mut arena, inner)
            }
            // brackets are consumed during postfix conversion and never
            // reach the builder from `compile`
            Token::LeftParen | Token::RightParen => {
                return Err(CompileErr::new(CompileErrKind::MalformedPattern)
                    .with_data(format!("bracket {} in postfix position", token)))
            }
        };

        fragments.push(fragment);
    }

    match (fragments.pop(), fragments.is_empty()) {
        (Some(fragment), true) => Ok(Nfa::new(arena, fragment)),
        (Some(_), false) => Err(CompileErr::new(CompileErrKind::MalformedPattern)
            .with_data("pattern leaves more than one fragment".to_string())),
        (None, _) => Err(CompileErr::new(CompileErrKind::MalformedPattern)
            .with_data("pattern produces no fragment".to_string())),
    }
}

fn pop_operand(fragments: &mut Vec<Fragment>, operator: Token) -> Result<Fragment, CompileErr> {
    fragments.pop().ok_or_else(|| {
        CompileErr::new(CompileErrKind::MalformedPattern)
            .with_data(format!("missing operand for {}", operator))
    })
}

/// Builds the two-state fragment consuming a single literal.
fn literal(arena: &mut StateArena, value: char) -> Fragment {
    let accept = arena.insert_state_mut(State::new());
    let start = arena.insert_state_mut(State::new().with_label(value).with_edge(accept));

    Fragment::new(start, accept)
}

/// Splices the left fragment's accept state into the right fragment's
/// start, demoting the former accept to an interior epsilon node.
fn concatenation(arena: &mut StateArena, left: Fragment, right: Fragment) -> Fragment {
    arena[left.accept()].add_edge_mut(right.start());

    Fragment::new(left.start(), right.accept())
}

/// Joins two fragments under a new start state branching to both, with both
/// old accept states forwarded to a new shared accept.
fn alternation(arena: &mut StateArena, left: Fragment, right: Fragment) -> Fragment {
    let accept = arena.insert_state_mut(State::new());
    let start =
        arena.insert_state_mut(State::new().with_edge(left.start()).with_edge(right.start()));

    arena[left.accept()].add_edge_mut(accept);
    arena[right.accept()].add_edge_mut(accept);

    Fragment::new(start, accept)
}

/// Wraps a fragment with the zero-repetition bypass and the loop-back edge.
/// The loop-back is what introduces cycles into the graph.
fn kleene_star(arena: &mut StateArena, inner: Fragment) -> Fragment {
    let accept = arena.insert_state_mut(State::new());
    let start = arena.insert_state_mut(State::new().with_edge(inner.start()).with_edge(accept));

    arena[inner.accept()].add_edge_mut(inner.start());
    arena[inner.accept()].add_edge_mut(accept);

    Fragment::new(start, accept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thompson_runtime::StateId;

    #[test]
    fn should_compile_literal_to_two_state_fragment() {
        let nfa = compile("a").unwrap();

        assert_eq!(2, nfa.state_cnt());

        let start = nfa.state(nfa.start()).unwrap();
        assert_eq!(Some('a'), start.label());
        assert_eq!(1, start.edges().len());
        assert_eq!(nfa.accept(), start.edges()[0]);

        // the top-level accept state stays open
        assert!(nfa.state(nfa.accept()).unwrap().edges().is_empty());
    }

    #[test]
    fn should_splice_concatenated_fragments_through_the_interior_accept() {
        let nfa = compile("a.b").unwrap();

        // two literal fragments and no new states for the splice
        assert_eq!(4, nfa.state_cnt());

        // insertion order: `a` accept, `a` start, `b` accept, `b` start
        let interior = nfa.state(StateId::from(0)).unwrap();
        assert_eq!(None, interior.label());
        assert_eq!(&[StateId::from(3)], interior.edges());
    }

    #[test]
    fn should_order_alternation_branches_left_operand_first() {
        let nfa = compile("a|b").unwrap();

        assert_eq!(6, nfa.state_cnt());

        // insertion order: `a` accept/start, `b` accept/start, then the new
        // accept and start
        let start = nfa.state(nfa.start()).unwrap();
        assert_eq!(&[StateId::from(1), StateId::from(3)], start.edges());
    }

    #[test]
    fn should_loop_star_fragment_back_to_its_own_start() {
        let nfa = compile("b*").unwrap();

        assert_eq!(4, nfa.state_cnt());

        // the wrapped literal's accept gains the loop-back and exit edges
        let inner_accept = nfa.state(StateId::from(0)).unwrap();
        assert_eq!(&[StateId::from(1), nfa.accept()], inner_accept.edges());

        let start = nfa.state(nfa.start()).unwrap();
        assert_eq!(&[StateId::from(1), nfa.accept()], start.edges());
    }

    #[test]
    fn should_fail_on_operators_missing_operands() {
        let inputs = vec![".", "*", "|", "a.", "|b", "a|"];

        for (test_id, input) in inputs.into_iter().enumerate() {
            assert_eq!(
                (test_id, Some(CompileErrKind::MalformedPattern)),
                (test_id, compile(input).err().map(|err| err.kind()))
            );
        }
    }

    #[test]
    fn should_fail_on_empty_pattern() {
        assert_eq!(
            Some(CompileErrKind::MalformedPattern),
            compile("").err().map(|err| err.kind())
        );
    }

    #[test]
    fn should_fail_on_unbalanced_brackets() {
        let inputs = vec!["(a", "a)", "((a.b)"];

        for (test_id, input) in inputs.into_iter().enumerate() {
            assert_eq!(
                (test_id, Some(CompileErrKind::UnbalancedParentheses)),
                (test_id, compile(input).err().map(|err| err.kind()))
            );
        }
    }

    #[test]
    fn should_fail_on_adjacent_literals_without_concat_operator() {
        // `ab` leaves two fragments on the stack: concatenation is only
        // explicit in this syntax
        assert_eq!(
            Some(CompileErrKind::MalformedPattern),
            compile("ab").err().map(|err| err.kind())
        );
    }

    #[test]
    fn should_reject_bracket_tokens_fed_directly_to_the_builder() {
        let res = build(vec![Token::Literal('a'), Token::LeftParen]);

        assert_eq!(
            Some(CompileErrKind::MalformedPattern),
            res.err().map(|err| err.kind())
        );
    }
}

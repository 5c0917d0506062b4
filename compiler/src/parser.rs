use parcel::parsers::character::expect_character;
use parcel::prelude::v1::*;

use super::token::Token;

#[derive(PartialEq, Eq)]
pub enum ParseErr {
    InvalidPattern,
    Undefined(String),
}

impl std::fmt::Debug for ParseErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined(err) => write!(f, "undefined parse error: {}", err),
            Self::InvalidPattern => write!(f, "provided pattern is invalid",),
        }
    }
}

/// Scans an enumerated character stream into the token alphabet, consuming
/// the input in full.
pub fn parse(input: &[(usize, char)]) -> Result<Vec<Token>, ParseErr> {
    tokens()
        .parse(input)
        .map_err(|err| ParseErr::Undefined(format!("unspecified parse error occured: {}", err)))
        .and_then(|ms| match ms {
            MatchStatus::Match {
                remainder, inner, ..
            } if remainder.is_empty() => Ok(inner),
            MatchStatus::Match { .. } | MatchStatus::NoMatch(..) => Err(ParseErr::InvalidPattern),
        })
}

fn tokens<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Vec<Token>> {
    parcel::zero_or_more(token())
}

fn token<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(operator(), || literal())
}

fn operator<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    parcel::or(expect_character('*').map(|_| Token::Star), || {
        parcel::or(expect_character('.').map(|_| Token::Concat), || {
            parcel::or(expect_character('|').map(|_| Token::Alternation), || {
                parcel::or(expect_character('(').map(|_| Token::LeftParen), || {
                    expect_character(')').map(|_| Token::RightParen)
                })
            })
        })
    })
}

fn literal<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], Token> {
    any_character()
        .predicate(|c| !['*', '.', '|', '(', ')'].contains(c))
        .map(Token::Literal)
}

fn any_character<'a>() -> impl parcel::Parser<'a, &'a [(usize, char)], char> {
    move |input: &'a [(usize, char)]| match input.get(0..1) {
        Some(&[(next_pos, next)]) => Ok(MatchStatus::Match {
            span: next_pos..next_pos + 1,
            remainder: &input[1..],
            inner: next,
        }),
        _ => Ok(MatchStatus::NoMatch(input)),
    }
}

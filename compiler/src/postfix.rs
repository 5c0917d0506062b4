//! Reorders a tokenized infix pattern into postfix order using the
//! shunting-yard algorithm.

use super::token::Token;

#[derive(PartialEq, Eq)]
pub enum ConversionErr {
    UnbalancedParentheses,
}

impl std::fmt::Debug for ConversionErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses => write!(f, "pattern contains unbalanced parentheses"),
        }
    }
}

/// Converts a token sequence from infix to postfix order.
///
/// Literals pass straight to the output. An operator first pops every
/// stacked operator binding strictly tighter than itself; popping stops at
/// equal strength, so chains of one operator are consumed left to right.
/// Brackets delimit a stack region: `)` drains to the matching `(` and both
/// are discarded. A bracket left unmatched on either side fails with
/// [ConversionErr::UnbalancedParentheses].
pub fn shunt(input: Vec<Token>) -> Result<Vec<Token>, ConversionErr> {
    let mut operators: Vec<Token> = vec![];
    let mut postfix = Vec::with_capacity(input.len());

    for token in input {
        match token {
            Token::Literal(_) => postfix.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(operator) => postfix.push(operator),
                    None => return Err(ConversionErr::UnbalancedParentheses),
                }
            },
            operator => {
                while operators
                    .last()
                    .map_or(false, |top| top.precedence() > operator.precedence())
                {
                    if let Some(top) = operators.pop() {
                        postfix.push(top);
                    }
                }

                operators.push(operator);
            }
        }
    }

    while let Some(operator) = operators.pop() {
        if operator == Token::LeftParen {
            return Err(ConversionErr::UnbalancedParentheses);
        }
        postfix.push(operator);
    }

    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_infix_patterns_to_postfix_order() {
        let input_output = vec![
            ("a", "a"),
            ("a.b", "ab."),
            ("a.b|b*", "ab.b*|"),
            ("(a.b)|c", "ab.c|"),
            ("a.(b|c)*", "abc|*."),
            ("b**", "b**"),
        ];

        for (test_id, (input, expected)) in input_output.into_iter().enumerate() {
            let tokens = input.chars().map(Token::from).collect();
            let expected_tokens = expected.chars().map(Token::from).collect::<Vec<_>>();

            assert_eq!((test_id, Ok(expected_tokens)), (test_id, shunt(tokens)));
        }
    }

    #[test]
    fn should_stack_equal_precedence_operators_without_popping() {
        // chains of one operator drain from the stack only at the end of
        // the scan
        let tokens = "a.b.c".chars().map(Token::from).collect();
        let expected_tokens = "abc..".chars().map(Token::from).collect::<Vec<_>>();

        assert_eq!(Ok(expected_tokens), shunt(tokens));
    }

    #[test]
    fn should_convert_empty_token_sequence_to_empty_output() {
        assert_eq!(Ok(vec![]), shunt(vec![]));
    }

    #[test]
    fn should_fail_on_unbalanced_brackets() {
        let inputs = vec!["(a", "a)", "(a.b", "a.b)", ")("];

        for (test_id, input) in inputs.into_iter().enumerate() {
            let tokens = input.chars().map(Token::from).collect();

            assert_eq!(
                (test_id, Err(ConversionErr::UnbalancedParentheses)),
                (test_id, shunt(tokens))
            );
        }
    }
}

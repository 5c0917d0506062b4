use thompson_compiler::{compile, matches, CompileErrKind};
use thompson_runtime::run;

#[test]
fn should_match_fully_anchored_patterns() {
    let input_output = vec![
        ("a.b", "ab", true),
        ("a.b", "ax", false),
        ("a.b", "abb", false),
        ("a.b.c", "abc", true),
        ("a.b.c", "ab", false),
        ("a.b|b*", "bbbbb", true),
        ("a.b|b*", "bbx", false),
        ("a.b|b*", "ab", true),
        ("a.b|b*", "", true),
        ("b**", "b", true),
        ("b**", "x", false),
        ("b*", "", true),
        ("b", "", false),
        ("a.(b|c)*", "abcbcb", true),
        ("a.(b|c)*", "a", true),
        ("a.(b|c)*", "abxc", false),
        ("(a|b).c", "ac", true),
        ("(a|b).c", "bc", true),
        ("(a|b).c", "c", false),
        ("a.b.b.c*", "abb", true),
        ("a.b.b.c*", "abbccc", true),
        ("a.b.b.c*", "abc", false),
    ];

    for (test_id, (pattern, input, expected)) in input_output.into_iter().enumerate() {
        assert_eq!((test_id, Ok(expected)), (test_id, matches(pattern, input)));
    }
}

#[test]
fn should_compile_independent_automatons_with_identical_verdicts() {
    let subjects = ["", "a", "ab", "abc", "bbbbb", "bbx", "abcbcb"];

    let first = compile("a.(b|c)*|b*").unwrap();
    let second = compile("a.(b|c)*|b*").unwrap();

    for (test_id, subject) in subjects.into_iter().enumerate() {
        assert_eq!(
            (test_id, run(&first, subject)),
            (test_id, run(&second, subject))
        );
    }
}

#[test]
fn should_bind_star_tighter_than_concat_tighter_than_alternation() {
    let input_output = vec![
        // `a.b|b*` groups as `(a.b)|(b*)`, never `a.(b|b)*`
        ("a.b|b*", "ab", true),
        ("a.b|b*", "abab", false),
        // `a.b*` groups as `a.(b*)`, never `(a.b)*`
        ("a.b*", "a", true),
        ("a.b*", "abbb", true),
        ("a.b*", "abab", false),
    ];

    for (test_id, (pattern, input, expected)) in input_output.into_iter().enumerate() {
        assert_eq!((test_id, Ok(expected)), (test_id, matches(pattern, input)));
    }
}

#[test]
fn should_consume_equal_precedence_chains_without_grouping() {
    let input_output = vec![
        ("a.b.c.d", "abcd", true),
        ("a|b|c", "b", true),
        ("a|b|c", "d", false),
    ];

    for (test_id, (pattern, input, expected)) in input_output.into_iter().enumerate() {
        assert_eq!((test_id, Ok(expected)), (test_id, matches(pattern, input)));
    }
}

#[test]
fn should_signal_error_kind_for_malformed_patterns() {
    let input_output = vec![
        ("(a", CompileErrKind::UnbalancedParentheses),
        ("a)", CompileErrKind::UnbalancedParentheses),
        ("(a.b", CompileErrKind::UnbalancedParentheses),
        (".", CompileErrKind::MalformedPattern),
        ("a.", CompileErrKind::MalformedPattern),
        ("|b", CompileErrKind::MalformedPattern),
        ("*", CompileErrKind::MalformedPattern),
        ("", CompileErrKind::MalformedPattern),
    ];

    for (test_id, (pattern, expected_kind)) in input_output.into_iter().enumerate() {
        let res = matches(pattern, "irrelevant");

        assert_eq!(
            (test_id, Some(expected_kind)),
            (test_id, res.err().map(|err| err.kind()))
        );
    }
}

use mixspace_engine::{TokenKind, TokenizeError, parsing::snapshot::check_invariants, tokenize};
use proptest::prelude::*;

fn text_from(alphabet: &'static [char], max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(alphabet), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

const MIXED: &[char] = &[
    'a', 'b', 'Z', '1', ' ', ' ', '中', '文', '(', ')', '（', '）', '“', '”', '‘', '’', '「',
    '」', '"', '\'', ',', '。', '!',
];

proptest! {
    #[test]
    fn successful_parses_are_lossless(text in text_from(MIXED, 48)) {
        if let Ok(doc) = tokenize(&text) {
            check_invariants(&text, &doc);
        }
    }

    #[test]
    fn bracket_depth_follows_a_stack(text in text_from(&['a', ' ', '(', ')', '（', '）'], 32)) {
        let mut depth = 0usize;
        let mut expected_err = None;
        let mut content_depths = vec![];
        for (i, c) in text.chars().enumerate() {
            match c {
                '(' | '（' => depth += 1,
                ')' | '）' => {
                    if depth == 0 {
                        expected_err = Some(TokenizeError::UnmatchedClosingBracket { ch: c, index: i });
                        break;
                    }
                    depth -= 1;
                }
                _ => content_depths.push((i, depth)),
            }
        }

        match (tokenize(&text), expected_err) {
            (Err(err), Some(expected)) => prop_assert_eq!(err, expected),
            (Ok(doc), None) => {
                check_invariants(&text, &doc);
                for (i, d) in content_depths {
                    prop_assert_eq!(doc.bracket_depth_at(i), d, "depth at {}", i);
                }
                prop_assert_eq!(doc.unterminated_marks().count(), depth);
            }
            (got, expected) => prop_assert!(false, "got {:?}, expected error {:?}", got, expected),
        }
    }

    #[test]
    fn right_quote_without_group_fails(text in text_from(&['a', 'b', ' ', '”', '」'], 32)) {
        let first = text.chars().enumerate().find(|(_, c)| matches!(c, '”' | '」'));
        match first {
            Some((index, ch)) => prop_assert_eq!(
                tokenize(&text).unwrap_err(),
                TokenizeError::UnmatchedClosingQuote { ch, index }
            ),
            None => prop_assert!(tokenize(&text).is_ok()),
        }
    }

    #[test]
    fn content_runs_merge_by_width(text in text_from(&['a', 'b', 'c', '中', '文'], 32)) {
        let doc = tokenize(&text).unwrap();
        let mut runs: Vec<(TokenKind, String)> = vec![];
        for c in text.chars() {
            let kind = if c.is_ascii() { TokenKind::ContentHalf } else { TokenKind::ContentFull };
            match runs.last_mut() {
                Some((k, run)) if *k == kind => run.push(c),
                _ => runs.push((kind, c.to_string())),
            }
        }
        let leaves: Vec<_> = doc.leaves().into_iter().map(|t| (t.kind, t.raw.clone())).collect();
        prop_assert_eq!(leaves, runs);
    }
}

//! End-to-end tests for the parsing module.
//!
//! Each scenario tokenizes a short text, checks the structural invariants and
//! compares the rendered tree against an inline snapshot.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    TokenizeError, Tokenizer,
    scanner::HyperMark,
    snapshot::{check_invariants, render},
    tokenize,
    tokens::{Document, TokenKind},
};

fn parse(text: &str) -> Document {
    let doc = tokenize(text).unwrap();
    check_invariants(text, &doc);
    doc
}

#[test]
fn bracketed_word() {
    assert_snapshot!(render(&parse("(hi)")), @r#"
    Root
      MarkBrackets@0+1 "(" mark#0 Left
      ContentHalf@1+2 "hi"
      MarkBrackets@3+1 ")" mark#0 Right
    Marks
      #0 Brackets@0..3 "(" ")"
    "#);
}

#[test]
fn neutral_quotes_toggle() {
    let doc = parse(r#""a"b""#);
    assert_snapshot!(render(&doc), @r#"
    Root
      Group@0..2 "\"" "\""
        ContentHalf@1+1 "a"
      ContentHalf@3+1 "b"
      Group@4..? "\"" ""
    "#);
    assert_eq!(doc.unterminated_groups().count(), 1);
}

#[test]
fn nested_curly_quotes() {
    assert_snapshot!(render(&parse("“a ‘b’ c”")), @r#"
    Root
      Group@0..8 "“" "”"
        ContentHalf@1+1 "a"
        Space@2+1 " "
        Group@3..5 "‘" "’"
          ContentHalf@4+1 "b"
        Space@6+1 " "
        ContentHalf@7+1 "c"
    "#);
}

#[test]
fn apostrophe_closes_its_own_group() {
    assert_snapshot!(render(&parse("'a' b")), @r#"
    Root
      Group@0..2 "'" "'"
        ContentHalf@1+1 "a"
      Space@3+1 " "
      ContentHalf@4+1 "b"
    "#);
}

#[test]
fn brackets_cross_group_boundaries() {
    assert_snapshot!(render(&parse("“(a”)")), @r#"
    Root
      Group@0..3 "“" "”"
        MarkBrackets@1+1 "(" mark#0 Left
        ContentHalf@2+1 "a"
      MarkBrackets@4+1 ")" mark#0 Right
    Marks
      #0 Brackets@1..4 "(" ")"
    "#);
}

#[test]
fn mixed_script_sentence() {
    assert_snapshot!(render(&parse("中文（English）测试。")), @r#"
    Root
      ContentFull@0+2 "中文"
      MarkBrackets@2+1 "（" mark#0 Left
      ContentHalf@3+7 "English"
      MarkBrackets@10+1 "）" mark#0 Right
      ContentFull@11+2 "测试"
      PunctuationFull@13+1 "。"
    Marks
      #0 Brackets@2..10 "（" "）"
    "#);
}

#[test]
fn unclosed_bracket_is_left_open() {
    let doc = parse("(a");
    assert_snapshot!(render(&doc), @r#"
    Root
      MarkBrackets@0+1 "(" mark#0 Left
      ContentHalf@1+1 "a"
    Marks
      #0 Brackets@0..? "(" ""
    "#);
    assert_eq!(doc.unterminated_marks().count(), 1);
    assert_eq!(doc.bracket_depth_at(1), 1);
}

#[test]
fn hyper_marks_in_the_tree() {
    let text = "**a**";
    let doc = Tokenizer::new()
        .tokenize_with_hyper_marks(text, &[HyperMark::hyper(0, "**", 3, "**")])
        .unwrap();
    check_invariants(text, &doc);
    assert_snapshot!(render(&doc), @r#"
    Root
      MarkHyper@0+2 "**" mark#0 Left
      ContentHalf@2+1 "a"
      MarkHyper@3+2 "**" mark#0 Right
    Marks
      #0 Hyper@0..3 "**" "**"
    "#);
}

#[rstest]
#[case::contraction("don't", &["don't"])]
#[case::plural_possessive("students' books", &["students'", " ", "books"])]
#[case::curly_contraction("it’s", &["it’s"])]
#[case::class_change("abc中", &["abc", "中"])]
#[case::space_run("a   b", &["a", "   ", "b"])]
#[case::punctuation_splits("a,b", &["a", ",", "b"])]
fn leaf_text(#[case] text: &str, #[case] expected: &[&str]) {
    let doc = parse(text);
    let leaves: Vec<_> = doc.leaves().iter().map(|t| t.raw.as_str()).collect();
    assert_eq!(leaves, expected);
}

#[rstest]
#[case::lone_bracket(")", TokenizeError::UnmatchedClosingBracket { ch: ')', index: 0 })]
#[case::after_text("a)b", TokenizeError::UnmatchedClosingBracket { ch: ')', index: 1 })]
#[case::double_close("(a))", TokenizeError::UnmatchedClosingBracket { ch: ')', index: 3 })]
#[case::full_width("（））", TokenizeError::UnmatchedClosingBracket { ch: '）', index: 2 })]
#[case::top_level_quote("a”", TokenizeError::UnmatchedClosingQuote { ch: '”', index: 1 })]
#[case::trailing_apostrophe("a’", TokenizeError::UnmatchedClosingQuote { ch: '’', index: 1 })]
#[case::quote_closed_twice("“a”」", TokenizeError::UnmatchedClosingQuote { ch: '」', index: 3 })]
fn unmatched_closers(#[case] text: &str, #[case] expected: TokenizeError) {
    assert_eq!(tokenize(text).unwrap_err(), expected);
}

#[test]
fn right_quote_closes_whatever_group_is_open() {
    let doc = parse("「a”");
    let (_, group) = doc.groups().next().unwrap();
    assert_eq!(group.start_content, "「");
    assert_eq!(group.end_content, "”");
}

#[test]
fn empty_input() {
    let doc = parse("");
    assert!(doc.root().children.is_empty());
    assert!(doc.marks().is_empty());
}

#[test]
fn unknown_characters_join_the_current_run() {
    let doc = parse("a\u{0301}b");
    let leaves = doc.leaves();
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].kind, TokenKind::ContentHalf);
    assert_eq!(leaves[0].length, 3);
}

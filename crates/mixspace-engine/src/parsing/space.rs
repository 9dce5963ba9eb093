use super::chars::{CharClassifier, CharType};

/// Length of the run of consecutive spaces starting at `start`.
///
/// Returns 0 if `start` is out of range or not a space. A pure lookahead: the
/// caller decides what to do with the run.
pub fn connecting_space_length<C: CharClassifier + ?Sized>(
    chars: &[char],
    start: usize,
    classifier: &C,
) -> usize {
    chars
        .get(start..)
        .unwrap_or_default()
        .iter()
        .take_while(|&&c| classifier.classify(c) == CharType::Space)
        .count()
}

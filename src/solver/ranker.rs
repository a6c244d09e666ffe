//! Deterministic ranking of scored words

use super::scorer::ScoredWord;
use std::cmp::Reverse;

/// Sort by score descending, then word text ascending
///
/// Two stable passes: alphabetical first, then by score, so words that share
/// a score stay in alphabetical order.
pub fn rank(words: &mut [ScoredWord<'_>]) {
    words.sort_by(|a, b| a.word.text().cmp(b.word.text()));
    words.sort_by_key(|w| Reverse(w.score));
}

/// Leading words that share the highest score
///
/// Expects a slice already sorted by [`rank`].
///
/// # Panics
/// Panics if `sorted` is empty
#[must_use]
pub fn top_group<'s, 'a>(sorted: &'s [ScoredWord<'a>]) -> &'s [ScoredWord<'a>] {
    let Some(first) = sorted.first() else {
        panic!("top group requested from an empty word list");
    };
    let len = sorted
        .iter()
        .take_while(|w| w.score == first.score)
        .count();
    &sorted[..len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn list(entries: &[(&str, u32)]) -> Vec<Word> {
        entries.iter().map(|(t, _)| Word::new(*t).unwrap()).collect()
    }

    fn scored<'a>(words: &'a [Word], entries: &[(&str, u32)]) -> Vec<ScoredWord<'a>> {
        words
            .iter()
            .zip(entries)
            .map(|(word, &(_, score))| ScoredWord { word, score })
            .collect()
    }

    fn texts(words: &[ScoredWord]) -> Vec<String> {
        words.iter().map(|w| w.word.text().to_string()).collect()
    }

    #[test]
    fn rank_orders_by_score_then_text() {
        let entries = [("TOWER", 10), ("CRANE", 20), ("BUDGE", 10), ("ABIDE", 20)];
        let words = list(&entries);
        let mut s = scored(&words, &entries);

        rank(&mut s);

        assert_eq!(texts(&s), ["ABIDE", "CRANE", "BUDGE", "TOWER"]);
    }

    #[test]
    fn rank_is_idempotent() {
        let entries = [("SLATE", 3), ("CRANE", 7), ("TRACE", 7), ("ADIEU", 1)];
        let words = list(&entries);
        let mut s = scored(&words, &entries);

        rank(&mut s);
        let once = texts(&s);
        rank(&mut s);

        assert_eq!(texts(&s), once);
    }

    #[test]
    fn rank_tolerates_exact_duplicates() {
        let entries = [("CRANE", 5), ("CRANE", 5), ("ABIDE", 5)];
        let words = list(&entries);
        let mut s = scored(&words, &entries);

        rank(&mut s);

        assert_eq!(texts(&s), ["ABIDE", "CRANE", "CRANE"]);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let entries = [("crane", 1), ("CRANE", 1)];
        let words = list(&entries);
        let mut s = scored(&words, &entries);

        rank(&mut s);

        assert_eq!(texts(&s), ["CRANE", "crane"]);
    }

    #[test]
    fn top_group_takes_all_ties() {
        let entries = [("ABIDE", 9), ("CRANE", 9), ("TOWER", 4)];
        let words = list(&entries);
        let s = scored(&words, &entries);

        let top = top_group(&s);
        assert_eq!(texts(top), ["ABIDE", "CRANE"]);
    }

    #[test]
    fn top_group_single_leader() {
        let entries = [("CRANE", 9), ("ABIDE", 8)];
        let words = list(&entries);
        let s = scored(&words, &entries);

        assert_eq!(top_group(&s).len(), 1);
    }

    #[test]
    fn top_group_whole_list_when_all_tied() {
        let entries = [("ABIDE", 0), ("CRANE", 0)];
        let words = list(&entries);
        let s = scored(&words, &entries);

        assert_eq!(top_group(&s).len(), 2);
    }

    #[test]
    #[should_panic(expected = "empty word list")]
    fn top_group_of_nothing_fails_fast() {
        let _ = top_group(&[]);
    }
}

use proptest::prelude::*;

use super::*;
use crate::core::{Slots, WORD_LENGTH, Word};

// A five-letter alphabet keeps repeated letters common
fn word() -> impl Strategy<Value = Word> {
    "[ABCDE]{5}".prop_map(|text| Word::new(text).unwrap())
}

fn word_list(max: usize) -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec(word(), 1..max)
}

fn strike_mode() -> impl Strategy<Value = StrikeMode> {
    prop_oneof![Just(StrikeMode::FirstMatch), Just(StrikeMode::EveryMatch)]
}

proptest! {
    #[test]
    fn hits_never_exceed_word_length(guess in word(), answer in word()) {
        let mut working = Slots::from(&answer);
        let counts = match_letters(&guess, &mut working);

        prop_assert!(counts.hits() as usize <= WORD_LENGTH);
        prop_assert_eq!(counts.hits() as usize, working.blank_count());
    }

    #[test]
    fn self_match_is_maximal(guess in word(), answer in word()) {
        let own = match_letters(&guess, &mut Slots::from(&guess)).points();
        let other = match_letters(&guess, &mut Slots::from(&answer)).points();

        prop_assert_eq!(own, 15);
        prop_assert!(other <= own);
    }

    #[test]
    fn scoring_is_idempotent(words in word_list(12), split in 1usize..12) {
        let answer_count = split.min(words.len());
        let pool = AnswerPool::derive(&words, answer_count);
        let mut scored: Vec<ScoredWord> = words.iter().map(ScoredWord::unscored).collect();

        score_words(&mut scored, &pool);
        let first: Vec<u32> = scored.iter().map(|s| s.score).collect();
        score_words(&mut scored, &pool);
        let second: Vec<u32> = scored.iter().map(|s| s.score).collect();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn rank_is_a_total_order(words in word_list(16), scores in prop::collection::vec(0u32..6, 16)) {
        let mut scored: Vec<ScoredWord> = words
            .iter()
            .zip(&scores)
            .map(|(word, &score)| ScoredWord { word, score })
            .collect();

        rank(&mut scored);
        let once = scored.clone();
        rank(&mut scored);
        prop_assert_eq!(&once, &scored);

        for pair in scored.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.score >= b.score);
            if a.score == b.score {
                prop_assert!(a.word.text() <= b.word.text());
            }
        }
    }

    #[test]
    fn top_group_holds_only_the_maximum(
        words in word_list(16),
        scores in prop::collection::vec(0u32..4, 16)
    ) {
        let mut scored: Vec<ScoredWord> = words
            .iter()
            .zip(&scores)
            .map(|(word, &score)| ScoredWord { word, score })
            .collect();
        rank(&mut scored);

        let max = scored.iter().map(|w| w.score).max().unwrap();
        let top = top_group(&scored);

        prop_assert!(!top.is_empty());
        prop_assert!(top.iter().all(|w| w.score == max));
        prop_assert_eq!(top.len(), scored.iter().filter(|w| w.score == max).count());
    }

    #[test]
    fn striking_never_raises_a_score(guess in word(), answer in word(), mode in strike_mode()) {
        let before = match_letters(&guess, &mut Slots::from(&answer)).points();

        let mut reduced = Slots::from(&answer);
        strike_letters(&guess, &mut reduced, mode);
        let after = match_letters(&guess, &mut reduced).points();

        prop_assert!(after <= before);
    }

    #[test]
    fn every_match_strikes_at_least_as_much(guess in word(), answer in word()) {
        let mut first = Slots::from(&answer);
        let mut every = Slots::from(&answer);
        strike_letters(&guess, &mut first, StrikeMode::FirstMatch);
        strike_letters(&guess, &mut every, StrikeMode::EveryMatch);

        prop_assert!(every.blank_count() >= first.blank_count());
    }
}

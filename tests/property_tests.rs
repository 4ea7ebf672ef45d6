//! Properties that hold for every word and every guess sequence.

use proptest::prelude::*;

use rust_hangman::core::{GuessLetterAction, Phase};
use rust_hangman::rules::{GuessError, HangmanEngine};

/// Words mixing letters, spaces and punctuation.
fn word() -> impl Strategy<Value = String> {
    "[a-zA-Z ,!'-]{0,16}"
}

/// Guess sequences, repeats allowed.
fn guesses() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'z').prop_union(prop::char::range('A', 'Z')), 0..40)
}

fn is_subsequence(sub: &[char], seq: &[char]) -> bool {
    let mut it = seq.iter();
    sub.iter().all(|c| it.any(|s| s == c))
}

proptest! {
    #[test]
    fn masking_is_idempotent(word in word(), letters in guesses()) {
        let mut engine = HangmanEngine::new(&word);
        for letter in letters {
            let _ = engine.apply_action(GuessLetterAction::new(letter));
            prop_assert_eq!(engine.player_view(), engine.player_view());
        }
    }

    #[test]
    fn guesses_grow_by_one_per_success(word in word(), letters in guesses()) {
        let mut engine = HangmanEngine::new(&word);

        for letter in letters {
            let before = engine.state().clone();

            match engine.apply_action(GuessLetterAction::new(letter)) {
                Ok(_) => {
                    let after = engine.state();
                    prop_assert_eq!(after.guesses.len(), before.guesses.len() + 1);
                    prop_assert!(after.incorrect_guesses.len() >= before.incorrect_guesses.len());
                    prop_assert!(after.incorrect_guesses.len() <= before.incorrect_guesses.len() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(engine.state(), &before);
                }
            }

            let state = engine.state();
            prop_assert!(is_subsequence(&state.incorrect_guesses, &state.guesses));
        }
    }

    #[test]
    fn repeated_guesses_always_fail(word in word(), letters in guesses()) {
        let mut engine = HangmanEngine::new(&word);

        for letter in letters {
            let upper = letter.to_ascii_uppercase();
            let already = engine.state().guesses.contains(&upper);
            let finished = engine.state().phase == Phase::Finished;
            let before = engine.state().clone();

            let result = engine.apply_action(GuessLetterAction::new(letter));

            if finished {
                prop_assert_eq!(result, Err(GuessError::GameFinished));
            } else if already {
                prop_assert_eq!(result, Err(GuessError::AlreadyGuessed { letter: upper }));
            }
            if finished || already {
                prop_assert_eq!(engine.state(), &before);
            }
        }

        let mut seen = engine.state().guesses.to_vec();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), engine.state().guesses.len());
    }

    #[test]
    fn finished_iff_revealed_or_eight_misses(word in word(), letters in guesses()) {
        let mut engine = HangmanEngine::new(&word);
        let mut applied = false;

        for letter in letters {
            if engine.apply_action(GuessLetterAction::new(letter)).is_ok() {
                applied = true;
            }
            if applied {
                let state = engine.state();
                let expected = state.is_fully_revealed() || state.incorrect_guesses.len() >= 8;
                prop_assert_eq!(state.phase == Phase::Finished, expected);
            }
        }
    }

    #[test]
    fn available_actions_cover_unguessed_letters(word in word(), letters in guesses()) {
        let mut engine = HangmanEngine::new(&word);
        for letter in letters {
            let _ = engine.apply_action(GuessLetterAction::new(letter));
        }

        let state = engine.state();
        let available: Vec<char> = engine.available_actions().map(|a| a.letter).collect();
        let guessed_alpha = state.guesses.iter().filter(|c| c.is_ascii_uppercase()).count();

        prop_assert_eq!(available.len(), 26 - guessed_alpha);
        prop_assert!(available.windows(2).all(|w| w[0] < w[1]));
        for letter in 'A'..='Z' {
            prop_assert_eq!(available.contains(&letter), !state.guesses.contains(&letter));
        }

        // Restartable: a second enumeration yields the same sequence
        let again: Vec<char> = engine.available_actions().map(|a| a.letter).collect();
        prop_assert_eq!(available, again);
    }
}

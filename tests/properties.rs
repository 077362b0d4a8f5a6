//! Property-based invariant tests for the puzzle engines.
//!
//! 1. Correct count equals the number of exact position matches.
//! 2. Coloured letters never exceed the letter's multiplicity in the target.
//! 3. Evaluation is pure.
//! 4. Hard mode rejects any guess that moves a correct letter.
//! 5. Repeating the previous guess always passes hard mode.
//! 6. Every placed word can be located and reads back along a straight line.
//! 7. Built grids are fully populated with uppercase letters.
//! 8. Placements never disagree about a cell's letter.

use proptest::prelude::*;
use puzzle_grove::core::{LetterState, Word, evaluate, validate_hard_mode};
use puzzle_grove::grid::{Coord, build};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;

// ── Helpers ─────────────────────────────────────────────────────────────

fn word_strategy() -> impl Strategy<Value = Word> {
    // Small alphabet so duplicates and matches are common
    "[A-F]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn count_letter(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&c| c == letter).count()
}

fn grid_words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{1,8}", 0..8)
}

// ═════════════════════════════════════════════════════════════════════════
// Evaluation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn correct_count_matches_positions(target in word_strategy(), guess in word_strategy()) {
        let feedback = evaluate(&target, &guess);
        let exact = (0..5).filter(|&i| target.char_at(i) == guess.char_at(i)).count();
        prop_assert_eq!(feedback.count(LetterState::Correct), exact);
    }

    #[test]
    fn coloured_letters_bounded_by_target(target in word_strategy(), guess in word_strategy()) {
        let feedback = evaluate(&target, &guess);
        for letter in b'A'..=b'F' {
            let coloured = (0..5)
                .filter(|&i| guess.char_at(i) == letter && feedback[i] != LetterState::Absent)
                .count();
            let expected = count_letter(&target, letter).min(count_letter(&guess, letter));
            prop_assert_eq!(coloured, expected, "letter {}", char::from(letter));
        }
    }

    #[test]
    fn evaluation_is_pure(target in word_strategy(), guess in word_strategy()) {
        prop_assert_eq!(evaluate(&target, &guess), evaluate(&target, &guess));
    }

    #[test]
    fn self_evaluation_wins(target in word_strategy()) {
        prop_assert!(evaluate(&target, &target).is_win());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Hard mode
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn moving_a_correct_letter_is_rejected(
        target in word_strategy(),
        prior in word_strategy(),
        guess in word_strategy(),
    ) {
        let feedback = evaluate(&target, &prior);
        let dropped_green = (0..5).any(|i| {
            feedback[i] == LetterState::Correct && guess.char_at(i) != prior.char_at(i)
        });
        let result = validate_hard_mode(&guess, &prior, &feedback);
        if dropped_green {
            prop_assert!(result.is_err());
        }
        if result.is_ok() {
            for i in 0..5 {
                if feedback[i] == LetterState::Correct {
                    prop_assert_eq!(guess.char_at(i), prior.char_at(i));
                }
                if feedback[i] == LetterState::Present {
                    prop_assert!(guess.contains(prior.char_at(i)));
                }
            }
        }
    }

    #[test]
    fn violation_names_a_revealed_letter(
        target in word_strategy(),
        prior in word_strategy(),
        guess in word_strategy(),
    ) {
        let feedback = evaluate(&target, &prior);
        if let Err(violation) = validate_hard_mode(&guess, &prior, &feedback) {
            match violation.required_position {
                Some(i) => {
                    prop_assert_eq!(feedback[i], LetterState::Correct);
                    prop_assert_eq!(prior.char_at(i), violation.letter);
                    prop_assert_ne!(guess.char_at(i), violation.letter);
                }
                None => prop_assert!(!guess.contains(violation.letter)),
            }
        }
    }

    #[test]
    fn repeating_prior_guess_passes(target in word_strategy(), prior in word_strategy()) {
        let feedback = evaluate(&target, &prior);
        prop_assert!(validate_hard_mode(&prior, &prior, &feedback).is_ok());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Grid generation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn placed_words_are_locatable(
        words in grid_words_strategy(),
        size in 1usize..12,
        seed in any::<u64>(),
    ) {
        let puzzle = build(&words, size, &mut ChaCha20Rng::seed_from_u64(seed));
        prop_assert_eq!(puzzle.placements().len() + puzzle.unplaced().len(), words.len());

        for word in puzzle.placed_words() {
            let path = puzzle.locate(word);
            prop_assert_eq!(path.len(), word.len());
            prop_assert_eq!(puzzle.grid().read(&path), word);

            // One constant step between consecutive cells
            if path.len() > 1 {
                let step = |a: Coord, b: Coord| {
                    (b.x as isize - a.x as isize, b.y as isize - a.y as isize)
                };
                let first = step(path[0], path[1]);
                prop_assert!(first.0.abs() <= 1 && first.1.abs() <= 1 && first != (0, 0));
                for pair in path.windows(2) {
                    prop_assert_eq!(step(pair[0], pair[1]), first);
                }
            }
        }
    }

    #[test]
    fn grid_is_fully_populated(
        words in grid_words_strategy(),
        size in 0usize..16,
        seed in any::<u64>(),
    ) {
        let puzzle = build(&words, size, &mut ChaCha20Rng::seed_from_u64(seed));
        let grid = puzzle.grid();
        prop_assert_eq!(grid.size(), size);

        let mut cells = 0;
        for row in grid.rows() {
            prop_assert_eq!(row.len(), size);
            prop_assert!(row.iter().all(u8::is_ascii_uppercase));
            cells += row.len();
        }
        prop_assert_eq!(cells, size * size);
    }

    #[test]
    fn placements_never_conflict(
        words in grid_words_strategy(),
        size in 1usize..10,
        seed in any::<u64>(),
    ) {
        let puzzle = build(&words, size, &mut ChaCha20Rng::seed_from_u64(seed));
        let mut claimed: HashMap<Coord, u8> = HashMap::new();

        for placement in puzzle.placements() {
            for (coord, &letter) in placement.path().into_iter().zip(placement.word.as_bytes()) {
                let previous = *claimed.entry(coord).or_insert(letter);
                prop_assert_eq!(previous, letter, "conflict at {}", coord);
                prop_assert_eq!(puzzle.grid().get(coord), Some(letter));
            }
        }
    }
}

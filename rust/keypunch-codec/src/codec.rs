use keypunch_wordlist::WordIndex;

use crate::{DotGrid, GRID_DOTS, column_weight};

/// The interpretation of a single tag row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoded {
    /// No dot is punched; the row does not hold a word yet
    Blank,
    /// The punched dots resolve to the word at this index
    Word(WordIndex),
    /// Dots are punched, but their sum does not refer to any word
    Unreadable,
}

impl Decoded {
    /// The decoded [`WordIndex`], if the row resolved to one
    pub fn word_index(&self) -> Option<WordIndex> {
        match self {
            Decoded::Word(index) => Some(*index),
            _ => None,
        }
    }
}

/// Interpret the punched dots of a row as a recovery word.
///
/// The weighted sum of the punched dots is read as a one-based position in
/// the word list. A blank row decodes to [`Decoded::Blank`], and a sum beyond
/// the end of the word list decodes to [`Decoded::Unreadable`]; the two are
/// never conflated, so an untouched row can always be told apart from a
/// damaged or misread one.
pub fn decode(grid: &DotGrid) -> Decoded {
    match grid.value() {
        0 => Decoded::Blank,
        number => match WordIndex::try_from(number - 1) {
            Ok(index) => Decoded::Word(index),
            Err(_) => Decoded::Unreadable,
        },
    }
}

/// Produce the dot pattern that a tag row holds for the given word.
///
/// This is the exact inverse of [`decode`]: every [`WordIndex`] has one
/// canonical pattern, and decoding that pattern yields the index back.
pub fn encode(index: WordIndex) -> DotGrid {
    let number = u16::from(index) + 1;
    let mut grid = DotGrid::default();

    for column in 0..GRID_DOTS {
        if number & column_weight(column) != 0 {
            grid = grid.with_dot(column, true);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use keypunch_wordlist::{WordIndex, word};
    use rand::{Rng, thread_rng};

    use crate::{Decoded, DotGrid, GRID_DOTS, MAX_ROW_VALUE, decode, encode};

    #[test]
    fn it_decodes_every_encoded_word_back_to_itself() {
        for index in WordIndex::all() {
            assert_eq!(decode(&encode(index)), Decoded::Word(index));
        }
    }

    #[test]
    fn it_decodes_a_blank_row_as_blank() {
        assert_eq!(decode(&DotGrid::default()), Decoded::Blank);
    }

    #[test]
    fn it_reads_single_dot_rows_as_powers_of_two() -> Result<()> {
        for column in 0..GRID_DOTS {
            let grid = DotGrid::default().with_dot(column, true);
            let number = 1u16 << (GRID_DOTS - 1 - column);
            let expected = WordIndex::try_from(number - 1)?;

            assert_eq!(decode(&grid), Decoded::Word(expected));
        }

        Ok(())
    }

    #[test]
    fn it_punches_the_first_and_last_words_as_expected() -> Result<()> {
        // "abandon" is word number 1: only the lightest dot is punched
        let first = encode(WordIndex::try_from(0u16)?);
        assert!(first.dot(GRID_DOTS - 1));
        assert_eq!(first.value(), 1);

        // "zoo" is word number 2048: only the heaviest dot is punched
        let last = encode(WordIndex::try_from(2047u16)?);
        assert!(last.dot(0));
        assert_eq!(last.value(), 2048);

        assert_eq!(word(WordIndex::try_from(0u16)?), "abandon");
        assert_eq!(word(WordIndex::try_from(2047u16)?), "zoo");

        Ok(())
    }

    #[test]
    fn it_marks_sums_beyond_the_word_list_as_unreadable() {
        // 2048 + 1 = 2049, one past the last word number
        let just_past = DotGrid::default().with_dot(0, true).with_dot(GRID_DOTS - 1, true);
        assert_eq!(decode(&just_past), Decoded::Unreadable);

        let all_punched = DotGrid::from([true; GRID_DOTS]);
        assert_eq!(decode(&all_punched), Decoded::Unreadable);
    }

    #[test]
    fn it_never_conflates_blank_with_unreadable() {
        for value in 0..=MAX_ROW_VALUE {
            let mut grid = DotGrid::default();

            for column in 0..GRID_DOTS {
                if value & (1 << (GRID_DOTS - 1 - column)) != 0 {
                    grid = grid.with_dot(column, true);
                }
            }

            match decode(&grid) {
                Decoded::Blank => assert!(grid.is_blank()),
                Decoded::Word(_) | Decoded::Unreadable => assert!(!grid.is_blank()),
            }
        }
    }

    #[test]
    fn it_decodes_without_regard_to_history() {
        let mut rng = thread_rng();

        for _ in 0..100 {
            let index = WordIndex::try_from(rng.gen_range(0..2048u16)).unwrap();
            let grid = encode(index);

            // Reaching the same pattern by punching dots in an arbitrary
            // order decodes identically to the canonical pattern
            let mut rebuilt = DotGrid::default();
            let mut columns = (0..GRID_DOTS).collect::<Vec<_>>();

            while !columns.is_empty() {
                let position = rng.gen_range(0..columns.len());
                let column = columns.remove(position);
                rebuilt = rebuilt.with_dot(column, grid.dot(column));
            }

            assert_eq!(rebuilt, grid);
            assert_eq!(decode(&rebuilt), Decoded::Word(index));
        }
    }
}

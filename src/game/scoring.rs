//! The length-to-points table for valid words.

/// Shortest word length that scores at all.
pub const MIN_SCORING_LENGTH: usize = 3;

/// Longest length covered by the table; anything longer scores [`CEILING_SCORE`].
pub const MAX_TABLE_LENGTH: usize = 14;

/// Flat score for words longer than [`MAX_TABLE_LENGTH`].
pub const CEILING_SCORE: u32 = 25;

/// Returns the points a valid word of the given length is worth.
///
/// Lengths below three score nothing; the table grows with length up
/// to fourteen, and any longer word earns the flat ceiling rather than
/// a continued formula.
pub fn length_score(length: usize) -> u32 {
    match length {
        0..=2 => 0,
        3 => 1,
        4 => 2,
        5 => 3,
        6 => 4,
        7 => 6,
        8 => 8,
        9 => 10,
        10 => 12,
        11 => 14,
        12 => 16,
        13 => 18,
        14 => 20,
        _ => CEILING_SCORE,
    }
}

/// Returns the points a valid word is worth.
///
/// Length is counted in characters; by the time scoring runs every
/// word is lower-case ASCII (normalization strips the accents).
pub fn word_score(word: &str) -> u32 {
    length_score(word.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_score_zero() {
        assert_eq!(word_score(""), 0);
        assert_eq!(word_score("no"), 0);
    }

    #[test]
    fn test_table_is_monotonic() {
        let mut previous = 0;
        for length in MIN_SCORING_LENGTH..=MAX_TABLE_LENGTH {
            let score = length_score(length);
            assert!(score > previous, "length {length} did not grow");
            previous = score;
        }
        assert!(CEILING_SCORE > previous);
    }

    #[test]
    fn test_long_words_hit_the_ceiling() {
        assert_eq!(length_score(15), CEILING_SCORE);
        assert_eq!(length_score(40), CEILING_SCORE);
    }
}

//! Word ingestion normalization.

/// Punctuation stripped from submitted text before splitting.
const PUNCTUATION: &str = ".,;:'\"-_=+[]{}";

/// Splits raw submitted text into normalized words.
///
/// The whole text is lower-cased, each punctuation character is
/// replaced by a space (deleting it without merging adjacent tokens),
/// accented vowels are mapped to their unaccented forms, and the
/// result is split on whitespace.
pub fn normalize_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            c if PUNCTUATION.contains(c) => ' ',
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            c => c,
        })
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

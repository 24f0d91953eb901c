//! Per-round word classification and cross-player deduplication.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The four-way classification of one player's words for one round.
///
/// The sets are disjoint by construction: `repeated` is populated only
/// by the cross-player pass, which also removes those words from
/// `valid`. Equality is structural so evaluation results compare
/// field-wise in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultWords {
    /// Words in the dictionary, on the board, and found by this player alone.
    pub valid: HashSet<String>,
    /// Words found valid by two or more players; they score zero for all.
    pub repeated: HashSet<String>,
    /// Words absent from the dictionary.
    pub not_in_language: HashSet<String>,
    /// Dictionary words that trace no path on the board.
    pub not_in_board: HashSet<String>,
}

/// Moves every word valid for two or more players into their `repeated` sets.
///
/// Intersections are accumulated over all unordered user pairs first
/// and subtracted from `valid` only afterwards, so the outcome does not
/// depend on pair order: a word shared by three users leaves all three
/// `valid` sets.
pub(super) fn mark_repeated(results: &mut HashMap<String, ResultWords>) {
    let usernames: Vec<String> = results.keys().cloned().collect();
    let mut shared_by_user: HashMap<&str, HashSet<String>> = HashMap::new();

    for (i, first) in usernames.iter().enumerate() {
        for second in &usernames[i + 1..] {
            let shared: Vec<String> = results[first]
                .valid
                .intersection(&results[second].valid)
                .cloned()
                .collect();
            if shared.is_empty() {
                continue;
            }
            debug!(first, second, count = shared.len(), "Found repeated words");
            shared_by_user
                .entry(first)
                .or_default()
                .extend(shared.iter().cloned());
            shared_by_user.entry(second).or_default().extend(shared);
        }
    }

    for (username, words) in shared_by_user {
        if let Some(result) = results.get_mut(username) {
            for word in &words {
                result.valid.remove(word);
            }
            result.repeated.extend(words);
        }
    }
}

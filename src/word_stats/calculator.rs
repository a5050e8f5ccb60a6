//! Word statistics over part catalogs.
//!
//! Every function is a stateless transformation between catalogs, word counts
//! and scores. Results keep the insertion order of their inputs, so every
//! tie-break below is reproducible.

use tracing::{debug, warn};

use super::{
    constants::DEFAULT_TOP_N,
    word_map::{Count, IdfScores, Score, TfIdfScores, WordCounts},
};
use crate::error::{Error, Result};

/// Counts how often each word appears in `catalog`.
///
/// Words keep the order of their first occurrence. The counts always sum to
/// `catalog.len()`.
pub fn compute_word_counts<S: AsRef<str>>(catalog: &[S]) -> WordCounts {
    let mut word_counts = WordCounts::new();

    for word in catalog {
        *word_counts.entry(word.as_ref().to_owned()).or_insert(0) += 1;
    }

    debug!(
        words = catalog.len(),
        distinct = word_counts.len(),
        "Computed word counts"
    );

    word_counts
}

/// Removes `word` from `word_counts` in place, returning its count if it was
/// present. Absent words are ignored and the remaining order is kept.
pub fn remove_word(word: &str, word_counts: &mut WordCounts) -> Option<Count> {
    word_counts.shift_remove(word)
}

/// Returns the word with the highest count, or `""` if no word has a count
/// above zero.
///
/// Only a strictly greater count replaces the current best, so the first
/// maximum in insertion order wins a tie.
#[must_use]
pub fn most_frequent_word(word_counts: &WordCounts) -> &str {
    let mut most_frequent = "";
    let mut highest_count = 0;

    for (word, &count) in word_counts {
        if count > highest_count {
            highest_count = count;
            most_frequent = word.as_str();
        }
    }

    most_frequent
}

/// Multiplies each word's count by its IDF score.
///
/// # Errors
///
/// Returns [`Error::MissingIdf`] for the first counted word without an entry
/// in `idf_scores`.
pub fn compute_tf_idf_scores(
    word_counts: &WordCounts,
    idf_scores: &IdfScores,
) -> Result<TfIdfScores> {
    word_counts
        .iter()
        .map(|(word, &count)| {
            idf_scores
                .get(word)
                .map(|idf| (word.clone(), f64::from(count) * idf))
                .ok_or_else(|| Error::MissingIdf(word.clone()))
        })
        .collect()
}

/// Returns up to `n` words ordered by descending score.
///
/// The sort is stable: words with equal scores stay in insertion order.
#[must_use]
pub fn top_scored_words(tf_idf_scores: &TfIdfScores, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, Score)> = tf_idf_scores
        .iter()
        .map(|(word, &score)| (word, score))
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .take(n)
        .map(|(word, _)| word.clone())
        .collect()
}

/// [`top_scored_words`] with the default of ten words.
#[must_use]
pub fn best_scored_words(tf_idf_scores: &TfIdfScores) -> Vec<String> {
    top_scored_words(tf_idf_scores, DEFAULT_TOP_N)
}

/// Computes `1 / df` for every word across all catalogs, where `df` is the
/// total number of occurrences of the word summed over every catalog.
///
/// Every distinct word gets an entry. A word whose total is zero weighs
/// `0.0`, so its TF-IDF score is zero as well.
#[must_use]
pub fn compute_idf_scores(catalog_word_counts: &[WordCounts]) -> IdfScores {
    let mut totals = WordCounts::new();

    for word_counts in catalog_word_counts {
        for (word, &count) in word_counts {
            let total = totals.entry(word.clone()).or_insert(0);
            *total = total.saturating_add(count);
        }
    }

    debug!(
        catalogs = catalog_word_counts.len(),
        distinct = totals.len(),
        "Computed document frequencies"
    );

    totals
        .into_iter()
        .map(|(word, df)| {
            if df == 0 {
                warn!(word = word.as_str(), "Word has no occurrences, weighing it 0");
                return (word, 0.0);
            }

            (word, 1.0 / f64::from(df))
        })
        .collect()
}

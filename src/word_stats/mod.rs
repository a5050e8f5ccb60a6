mod calculator;
mod constants;
mod word_map;

pub use calculator::{
    best_scored_words, compute_idf_scores, compute_tf_idf_scores, compute_word_counts,
    most_frequent_word, remove_word, top_scored_words,
};
pub use constants::DEFAULT_TOP_N;
pub use word_map::{Count, IdfScores, Score, TfIdfScores, WordCounts, WordMap};

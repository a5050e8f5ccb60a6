use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    catalog::PartCatalog,
    error::Result,
    word_stats::{
        compute_idf_scores, compute_tf_idf_scores, compute_word_counts, most_frequent_word,
        remove_word, top_scored_words, IdfScores, TfIdfScores, WordCounts, DEFAULT_TOP_N,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub top_n: usize,
    /// Dropped from every catalog before any score is computed.
    pub excluded_words: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            excluded_words: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub name: String,
    /// Word count of the catalog as loaded, before exclusions.
    pub total_words: usize,
    /// Distinct words left after exclusions.
    pub distinct_words: usize,
    pub most_frequent_word: String,
    pub top_words: Vec<String>,
    pub tf_idf_scores: TfIdfScores,
}

impl CatalogReport {
    fn new(
        catalog: &PartCatalog,
        word_counts: &WordCounts,
        idf_scores: &IdfScores,
        top_n: usize,
    ) -> Result<Self> {
        let tf_idf_scores = compute_tf_idf_scores(word_counts, idf_scores)?;

        Ok(Self {
            name: catalog.name.clone(),
            total_words: catalog.words().len(),
            distinct_words: word_counts.len(),
            most_frequent_word: most_frequent_word(word_counts).to_owned(),
            top_words: top_scored_words(&tf_idf_scores, top_n),
            tf_idf_scores,
        })
    }
}

/// Key words of a set of catalog editions, scored against each other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryReport {
    pub catalogs: Vec<CatalogReport>,
    pub idf_scores: IdfScores,
}

impl DiscoveryReport {
    /// Scores every catalog against the whole set, after dropping the
    /// excluded words.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingIdf`] if a counted word has no IDF score.
    pub fn build(catalogs: &[PartCatalog], options: &ReportOptions) -> Result<Self> {
        let mut catalog_word_counts: Vec<WordCounts> = catalogs
            .iter()
            .map(|catalog| compute_word_counts(catalog.words()))
            .collect();

        for word_counts in &mut catalog_word_counts {
            for word in &options.excluded_words {
                if let Some(count) = remove_word(word, word_counts) {
                    debug!(word = word.as_str(), count, "Excluded word");
                }
            }
        }

        let idf_scores = compute_idf_scores(&catalog_word_counts);

        let catalogs = catalogs
            .iter()
            .zip(&catalog_word_counts)
            .map(|(catalog, word_counts)| {
                CatalogReport::new(catalog, word_counts, &idf_scores, options.top_n)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            catalogs = catalogs.len(),
            words = idf_scores.len(),
            "Built discovery report"
        );

        Ok(Self {
            catalogs,
            idf_scores,
        })
    }
}

impl fmt::Display for DiscoveryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for catalog in &self.catalogs {
            writeln!(
                f,
                "== {} ({} words, {} distinct)",
                catalog.name, catalog.total_words, catalog.distinct_words
            )?;
            writeln!(f, "most frequent: {}", catalog.most_frequent_word)?;

            for (rank, word) in catalog.top_words.iter().enumerate() {
                let score = catalog.tf_idf_scores.get(word).copied().unwrap_or_default();
                writeln!(f, "{:>4}. {word} ({score:.4})", rank + 1)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(name: &str, text: &str) -> PartCatalog {
        PartCatalog::new(
            name.to_string(),
            text.split_whitespace().map(String::from).collect(),
        )
    }

    #[test]
    fn empty_catalog_set() {
        let report =
            DiscoveryReport::build(&[], &ReportOptions::default()).expect("Failed to build");

        assert!(report.catalogs.is_empty());
        assert!(report.idf_scores.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn empty_catalog_in_set() {
        let catalogs = [catalog("empty", ""), catalog("tiny", "fan")];

        let report =
            DiscoveryReport::build(&catalogs, &ReportOptions::default()).expect("Failed to build");

        assert_eq!(report.catalogs[0].most_frequent_word, "");
        assert!(report.catalogs[0].top_words.is_empty());
        assert_eq!(report.catalogs[1].top_words, vec!["fan"]);
    }

    #[test]
    fn excluded_words_are_never_scored() {
        let catalogs = [
            catalog("a", "the fan the fan the"),
            catalog("b", "the bracket"),
        ];
        let options = ReportOptions {
            top_n: 5,
            excluded_words: vec!["the".to_string(), "unused".to_string()],
        };

        let report = DiscoveryReport::build(&catalogs, &options).expect("Failed to build");

        assert!(!report.idf_scores.contains_key("the"));
        for catalog in &report.catalogs {
            assert!(!catalog.tf_idf_scores.contains_key("the"));
            assert!(!catalog.top_words.contains(&"the".to_string()));
        }

        assert_eq!(report.catalogs[0].most_frequent_word, "fan");
        assert_eq!(report.catalogs[0].total_words, 5);
        assert_eq!(report.catalogs[0].distinct_words, 1);
    }

    #[test]
    fn top_n_limits_words() {
        let catalogs = [catalog("a", "a b c d e f")];
        let options = ReportOptions {
            top_n: 2,
            ..ReportOptions::default()
        };

        let report = DiscoveryReport::build(&catalogs, &options).expect("Failed to build");

        assert_eq!(report.catalogs[0].top_words, vec!["a", "b"]);
    }

    #[test]
    fn display_lists_ranked_words() {
        let catalogs = [catalog("kit", "bolt bolt nut")];

        let report =
            DiscoveryReport::build(&catalogs, &ReportOptions::default()).expect("Failed to build");

        assert_eq!(
            report.to_string(),
            "== kit (3 words, 2 distinct)\nmost frequent: bolt\n   1. bolt (1.0000)\n   2. nut (1.0000)\n"
        );
    }
}

//! Document and sentence ranking.
//!
//! Both rankers use a stable sort, so units with equal scores keep the order in
//! which they appear in the [`UnitSet`].

use crate::{IdfTable, Query, UnitSet};
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFile {
    pub name: String,
    /// Sum over query terms of `tf * idf`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSentence {
    pub text: String,
    /// Sum of IDF over distinct query terms the sentence contains.
    pub idf: f64,
    /// Fraction of the sentence's tokens that are query terms.
    pub density: f64,
}

/// Score every document by TF-IDF against the query, best first.
///
/// A query term missing from `idfs` never occurred in the corpus and
/// contributes zero.
pub fn rank_files(query: &Query, files: &UnitSet, idfs: &IdfTable) -> Vec<ScoredFile> {
    let mut scored: Vec<ScoredFile> = files
        .iter()
        .map(|(name, tokens)| {
            let score: f64 = query
                .iter()
                .map(|term| {
                    let tf = tokens.iter().filter(|t| *t == term).count();
                    if tf == 0 {
                        return 0.0;
                    }
                    tf as f64 * idfs.get(term).copied().unwrap_or(0.0)
                })
                .sum();
            ScoredFile { name: name.to_string(), score }
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Names of the `n` best documents for the query.
pub fn top_files(query: &Query, files: &UnitSet, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_files(query, files, idfs).into_iter().take(n).map(|f| f.name).collect()
}

/// Proportion of `tokens` that are query terms. Callers must not pass an empty sequence.
pub fn query_term_density(query: &Query, tokens: &[String]) -> f64 {
    debug_assert!(!tokens.is_empty(), "density of an empty sentence");
    let hits = tokens.iter().filter(|t| query.contains(*t)).count();
    hits as f64 / tokens.len() as f64
}

/// Score sentences by matching-word IDF, ties broken by query term density.
///
/// Sentences that contain no query term are left out.
pub fn rank_sentences(query: &Query, sentences: &UnitSet, idfs: &IdfTable) -> Vec<ScoredSentence> {
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .filter_map(|(text, tokens)| {
            let matched: Vec<f64> = query
                .iter()
                .filter(|term| tokens.contains(*term))
                .map(|term| idfs.get(term).copied().unwrap_or(0.0))
                .collect();
            if matched.is_empty() {
                return None;
            }
            Some(ScoredSentence {
                text: text.to_string(),
                idf: matched.iter().sum(),
                density: query_term_density(query, tokens),
            })
        })
        .collect();
    scored.sort_by(|a, b| {
        b.idf
            .partial_cmp(&a.idf)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.density.partial_cmp(&a.density).unwrap_or(Ordering::Equal))
    });
    scored
}

/// The `n` best sentences for the query.
pub fn top_sentences(query: &Query, sentences: &UnitSet, idfs: &IdfTable, n: usize) -> Vec<String> {
    rank_sentences(query, sentences, idfs).into_iter().take(n).map(|s| s.text).collect()
}

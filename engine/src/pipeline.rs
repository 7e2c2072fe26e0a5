use crate::{
    compute_idfs, parse_query, rank_files, rank_sentences, Corpus, Result, ScoredFile, ScoredSentence, TextNormalizer,
    UnitSet,
};
use serde::Serialize;

/// Ranked output of one query cycle, best first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Answer {
    pub files: Vec<ScoredFile>,
    pub sentences: Vec<ScoredSentence>,
}

impl Answer {
    pub fn sentence_texts(&self) -> impl Iterator<Item = &str> {
        self.sentences.iter().map(|s| s.text.as_str())
    }
}

/// Split a document into sentence units: passages by line, then sentences.
///
/// Sentences left with no tokens are skipped; repeated sentences are kept once.
pub fn split_units<N: TextNormalizer + ?Sized>(normalizer: &N, text: &str) -> UnitSet {
    let mut units = UnitSet::new();
    for passage in text.split('\n') {
        for sentence in normalizer.split_sentences(passage) {
            let tokens = normalizer.tokenize(&sentence);
            if !tokens.is_empty() {
                units.insert(sentence, tokens);
            }
        }
    }
    units
}

/// Answer a query against a corpus.
///
/// Documents are ranked by TF-IDF, the `file_matches` best are split into
/// sentences, and those sentences are ranked against their own IDF table.
/// Fails with [`crate::Error::EmptyUnitSet`] when the corpus is empty.
pub fn answer<N: TextNormalizer + ?Sized>(
    normalizer: &N,
    corpus: &Corpus,
    query_text: &str,
    file_matches: usize,
    sentence_matches: usize,
) -> Result<Answer> {
    let files: UnitSet = corpus.iter().map(|(name, text)| (name, normalizer.tokenize(text))).collect();
    let file_idfs = compute_idfs(&files)?;

    let query = parse_query(normalizer, query_text);
    if query.is_empty() {
        tracing::warn!(query = query_text, "query has no searchable terms");
    }
    tracing::debug!(terms = ?query, "parsed query");

    let mut top = rank_files(&query, &files, &file_idfs);
    top.truncate(file_matches);

    let mut sentences = UnitSet::new();
    for file in &top {
        let Some(text) = corpus.get(&file.name) else { continue };
        for (sentence, tokens) in split_units(normalizer, text).iter() {
            sentences.insert(sentence, tokens.to_vec());
        }
    }
    if sentences.is_empty() {
        tracing::warn!(files = top.len(), "selected documents contain no sentences");
        return Ok(Answer { files: top, sentences: Vec::new() });
    }

    let sentence_idfs = compute_idfs(&sentences)?;
    let mut ranked = rank_sentences(&query, &sentences, &sentence_idfs);
    ranked.truncate(sentence_matches);
    tracing::debug!(candidates = sentences.len(), returned = ranked.len(), "ranked sentences");

    Ok(Answer { files: top, sentences: ranked })
}

pub mod corpus;
pub mod error;
pub mod idf;
pub mod pipeline;
pub mod rank;
pub mod tokenizer;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use idf::compute_idfs;
pub use pipeline::{answer, split_units, Answer};
pub use rank::{query_term_density, rank_files, rank_sentences, top_files, top_sentences, ScoredFile, ScoredSentence};
pub use tokenizer::{tokenize, EnglishNormalizer, TextNormalizer};

use std::collections::{BTreeSet, HashMap};

/// Number of top documents whose sentences are considered.
pub const FILE_MATCHES: usize = 1;
/// Number of sentences returned for a query.
pub const SENTENCE_MATCHES: usize = 1;

pub type TokenSeq = Vec<String>;
pub type IdfTable = HashMap<String, f64>;
/// Deduplicated query terms. Sorted so score sums are accumulated in a fixed order.
pub type Query = BTreeSet<String>;

/// Build a [`Query`] from raw user input.
pub fn parse_query<N: TextNormalizer + ?Sized>(normalizer: &N, text: &str) -> Query {
    normalizer.tokenize(text).into_iter().collect()
}

/// Named token sequences (documents or sentences), kept in insertion order.
///
/// A name is stored once; inserting it again replaces the tokens but keeps
/// the slot of the first insertion, which is what tie-breaking relies on.
#[derive(Debug, Clone, Default)]
pub struct UnitSet {
    positions: HashMap<String, usize>,
    units: Vec<(String, TokenSeq)>,
}

impl UnitSet {
    pub fn new() -> Self { Self::default() }

    /// Insert a unit. Returns `false` when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, tokens: TokenSeq) -> bool {
        let name = name.into();
        match self.positions.get(&name) {
            Some(&pos) => {
                self.units[pos].1 = tokens;
                false
            }
            None => {
                self.positions.insert(name.clone(), self.units.len());
                self.units.push((name, tokens));
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.positions.get(name).map(|&pos| self.units[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.units.iter().map(|(name, tokens)| (name.as_str(), tokens.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize { self.units.len() }

    pub fn is_empty(&self) -> bool { self.units.is_empty() }
}

impl<S: Into<String>> FromIterator<(S, TokenSeq)> for UnitSet {
    fn from_iter<I: IntoIterator<Item = (S, TokenSeq)>>(iter: I) -> Self {
        let mut set = UnitSet::new();
        for (name, tokens) in iter {
            set.insert(name, tokens);
        }
        set
    }
}

use crate::TokenSeq;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

lazy_static! {
    // Treebank-style clitics, matched after lowercasing.
    static ref CLITIC: Regex =
        Regex::new(r"^(?P<stem>.+?)(?P<clitic>n['’]t|['’](?:s|re|ve|ll|d|m))$").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "i","me","my","myself","we","our","ours","ourselves",
            "you","you're","you've","you'll","you'd","your","yours","yourself","yourselves",
            "he","him","his","himself","she","she's","her","hers","herself",
            "it","it's","its","itself","they","them","their","theirs","themselves",
            "what","which","who","whom","this","that","that'll","these","those",
            "am","is","are","was","were","be","been","being","have","has","had","having","do","does","did","doing",
            "a","an","the","and","but","if","or","because","as","until","while",
            "of","at","by","for","with","about","against","between","into","through","during","before","after",
            "above","below","to","from","up","down","in","out","on","off","over","under",
            "again","further","then","once","here","there","when","where","why","how",
            "all","any","both","each","few","more","most","other","some","such",
            "no","nor","not","only","own","same","so","than","too","very",
            "s","t","can","will","just","don","don't","should","should've","now",
            "d","ll","m","o","re","ve","y",
            "ain","aren","aren't","couldn","couldn't","didn","didn't","doesn","doesn't",
            "hadn","hadn't","hasn","hasn't","haven","haven't","isn","isn't","ma",
            "mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't",
            "shouldn","shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't"
        ];
        words.iter().copied().collect()
    };
}

/// Language-specific text handling used by every ranking stage.
///
/// Implementations supply word splitting, sentence splitting and a stopword
/// list; [`TextNormalizer::tokenize`] combines them into the one normalization
/// that documents, sentences and queries must all share.
pub trait TextNormalizer {
    /// Split text into raw word tokens, with clitics such as `n't` as separate tokens.
    fn tokenize_words(&self, text: &str) -> Vec<String>;

    /// Split a passage into sentences.
    fn split_sentences(&self, text: &str) -> Vec<String>;

    fn is_stopword(&self, token: &str) -> bool;

    /// Lowercase, split into words, keep purely alphabetic tokens and drop stopwords.
    fn tokenize(&self, text: &str) -> TokenSeq {
        self.tokenize_words(&text.to_lowercase())
            .into_iter()
            .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
            .filter(|w| !self.is_stopword(w))
            .collect()
    }
}

/// English normalizer: NFKC, UAX#29 word and sentence boundaries, NLTK stopwords.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNormalizer;

impl TextNormalizer for EnglishNormalizer {
    fn tokenize_words(&self, text: &str) -> Vec<String> {
        // NFKC can produce uppercase letters, so lowercase after it.
        let normalized = text.nfkc().collect::<String>().to_lowercase();
        let mut words = Vec::new();
        for word in normalized.unicode_words() {
            match CLITIC.captures(word) {
                Some(caps) => {
                    words.push(caps["stem"].to_string());
                    words.push(caps["clitic"].to_string());
                }
                None => words.push(word.to_string()),
            }
        }
        words
    }

    fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn is_stopword(&self, token: &str) -> bool { STOPWORDS.contains(token) }
}

/// Tokenize text with the default [`EnglishNormalizer`].
pub fn tokenize(text: &str) -> TokenSeq {
    EnglishNormalizer.tokenize(text)
}

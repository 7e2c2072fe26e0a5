use crate::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Raw document texts keyed by name. Names iterate in sorted order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: BTreeMap<String, String>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Read every regular file directly inside `dir`.
    ///
    /// With `extension` set (a leading dot is ignored), only files carrying
    /// that extension are read. Documents are named by file name; files whose
    /// name is not valid UTF-8 are skipped.
    pub fn load_dir<P: AsRef<Path>>(dir: P, extension: Option<&str>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }

        let extension = extension.map(|e| e.trim_start_matches('.'));

        let mut corpus = Corpus::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let p = entry.path();
            if !p.is_file() { continue; }
            if let Some(wanted) = extension {
                if p.extension().and_then(|s| s.to_str()) != Some(wanted) { continue; }
            }
            let Some(name) = entry.file_name().to_str() else {
                tracing::warn!(path = %p.display(), "skipping file with non-UTF-8 name");
                continue;
            };
            let text = fs::read_to_string(p).map_err(|source| Error::Io { path: p.to_path_buf(), source })?;
            corpus.insert(name, text);
        }
        tracing::info!(dir = %dir.display(), num_docs = corpus.len(), "loaded corpus");
        Ok(corpus)
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(name.into(), text.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.docs.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.docs.iter().map(|(name, text)| (name.as_str(), text.as_str()))
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (name, text) in iter {
            corpus.insert(name, text);
        }
        corpus
    }
}

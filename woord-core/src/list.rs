/// Column languages of a word list, in provider order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages {
    /// Left column ("source") language name
    pub source: String,
    /// Right column ("target") language name
    pub target: String,
}

impl Languages {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Build from the first two names; `None` if fewer than two are given
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Option<Self> {
        match names {
            [source, target, ..] => Some(Self::new(source.as_ref(), target.as_ref())),
            _ => None,
        }
    }
}

/// One source/target term pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub source: String,
    pub target: String,
}

impl WordPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Ordered word pairs. Always represents an even-length flat sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPairs {
    pairs: Vec<WordPair>,
}

impl WordPairs {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        Self { pairs }
    }

    /// Pair up consecutive words. A trailing unpaired word is dropped and
    /// handed back so the caller can report it.
    pub fn from_flat(words: Vec<String>) -> (Self, Option<String>) {
        let mut pairs = Vec::with_capacity(words.len() / 2);
        let mut iter = words.into_iter();

        loop {
            match (iter.next(), iter.next()) {
                (Some(source), Some(target)) => pairs.push(WordPair { source, target }),
                (Some(unpaired), None) => return (Self { pairs }, Some(unpaired)),
                _ => return (Self { pairs }, None),
            }
        }
    }

    pub fn push(&mut self, pair: WordPair) {
        self.pairs.push(pair);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordPair> {
        self.pairs.iter()
    }

    /// Flat `source, target, source, target, ...` sequence
    pub fn to_flat(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .flat_map(|p| [p.source.as_str(), p.target.as_str()])
            .collect()
    }
}

impl<'a> IntoIterator for &'a WordPairs {
    type Item = &'a WordPair;
    type IntoIter = std::slice::Iter<'a, WordPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// A named list of word pairs across two languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    id: String,
    name: String,
    languages: Languages,
    words: WordPairs,
}

impl WordList {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        languages: Languages,
        words: WordPairs,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            languages,
            words,
        }
    }

    /// Provider id, or a synthetic `local-<n>` id for file-backed lists
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn languages(&self) -> &Languages {
        &self.languages
    }

    pub fn words(&self) -> &WordPairs {
        &self.words
    }

    pub fn pair_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_from_flat_even() {
        let (pairs, dropped) = WordPairs::from_flat(strings(&["hond", "собака", "kat", "кошка"]));
        assert_eq!(pairs.len(), 2);
        assert_eq!(dropped, None);
        assert_eq!(pairs.to_flat(), vec!["hond", "собака", "kat", "кошка"]);
    }

    #[test]
    fn test_from_flat_odd_drops_tail() {
        let (pairs, dropped) = WordPairs::from_flat(strings(&["hond", "собака", "kat"]));
        assert_eq!(pairs.len(), 1);
        assert_eq!(dropped.as_deref(), Some("kat"));
        assert_eq!(pairs.to_flat().len() % 2, 0);
    }

    #[test]
    fn test_from_flat_empty() {
        let (pairs, dropped) = WordPairs::from_flat(Vec::new());
        assert!(pairs.is_empty());
        assert_eq!(dropped, None);
    }

    #[test]
    fn test_languages_from_names() {
        assert_eq!(
            Languages::from_names(&["Dutch", "Russian", "English"]),
            Some(Languages::new("Dutch", "Russian"))
        );
        assert_eq!(Languages::from_names(&["Dutch"]), None);
        assert_eq!(Languages::from_names::<&str>(&[]), None);
    }
}

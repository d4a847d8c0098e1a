use crate::repositories::WordDictionary;
use std::collections::HashSet;

// Entries keep the casing of the list, so capitalised names stay capitalised.
#[derive(Default)]
pub struct InMemoryWordDictionary {
    words: HashSet<String>,
}

impl InMemoryWordDictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_owned())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }
}

impl WordDictionary for InMemoryWordDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

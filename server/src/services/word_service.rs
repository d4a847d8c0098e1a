use crate::repositories::WordDictionary;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordServiceError {
    #[error("word dictionary is not available")]
    DictionaryUnavailable,
    #[error("at most {max} words are allowed, got {count}")]
    TooManyWords { count: usize, max: usize },
}

/// Request words split by the dictionary, each side in request order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatedWords {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

#[async_trait]
pub trait WordService: Send + Sync {
    /// Keeps the dictionary words of `words`, in their original order.
    async fn filter_valid_words(&self, words: Vec<String>)
    -> Result<Vec<String>, WordServiceError>;

    async fn validate_words(&self, words: Vec<String>)
    -> Result<ValidatedWords, WordServiceError>;
}

pub struct WordServiceImpl {
    dictionary: Option<Arc<dyn WordDictionary>>,
    max_words: usize,
}

impl WordServiceImpl {
    pub fn new(dictionary: Option<Arc<dyn WordDictionary>>, max_words: usize) -> Self {
        Self {
            dictionary,
            max_words,
        }
    }

    /// A word is valid when its lower-case form is in the dictionary exactly
    /// as listed and it does not look like a proper noun (first letter
    /// capitalised). Names the list only holds capitalised never match.
    pub fn is_valid_word(dictionary: &dyn WordDictionary, word: &str) -> bool {
        let Some(first) = word.chars().next() else {
            return false;
        };

        !first.is_uppercase() && dictionary.contains(&word.to_lowercase())
    }

    fn checked_dictionary(
        &self,
        words: &[String],
    ) -> Result<&dyn WordDictionary, WordServiceError> {
        if words.len() > self.max_words {
            return Err(WordServiceError::TooManyWords {
                count: words.len(),
                max: self.max_words,
            });
        }

        self.dictionary
            .as_deref()
            .ok_or(WordServiceError::DictionaryUnavailable)
    }
}

#[async_trait]
impl WordService for WordServiceImpl {
    async fn filter_valid_words(
        &self,
        words: Vec<String>,
    ) -> Result<Vec<String>, WordServiceError> {
        let dictionary = self.checked_dictionary(&words)?;

        Ok(words
            .into_iter()
            .filter(|w| Self::is_valid_word(dictionary, w))
            .collect())
    }

    async fn validate_words(
        &self,
        words: Vec<String>,
    ) -> Result<ValidatedWords, WordServiceError> {
        let dictionary = self.checked_dictionary(&words)?;

        let (valid, invalid) = words
            .into_iter()
            .partition(|w| Self::is_valid_word(dictionary, w));

        Ok(ValidatedWords { valid, invalid })
    }
}

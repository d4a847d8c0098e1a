pub trait WordDictionary: Send + Sync {
    /// `word` is expected lower-cased.
    fn contains(&self, word: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

mod in_memory;
mod word_list;

pub use in_memory::InMemoryWordDictionary;
pub use word_list::{DictionaryConfig, WordListDictionary};

use scrabble_board_server::repositories::{WordDictionary, WordListDictionary};
use std::io::Write;

#[tokio::test]
async fn test_word_list_keeps_entries_as_written() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Hello\nworld\n\n  Scrabble  \n").unwrap();

    let dictionary = WordListDictionary::load(file.path()).await.unwrap();

    assert_eq!(dictionary.len(), 3);
    assert!(dictionary.contains("Hello"));
    assert!(dictionary.contains("world"));
    assert!(dictionary.contains("Scrabble"));
    assert!(!dictionary.contains("hello"));
    assert!(!dictionary.contains(""));
}

#[tokio::test]
async fn test_missing_word_list_is_an_error() {
    let directory = tempfile::tempdir().unwrap();

    let result = WordListDictionary::load(&directory.path().join("words.txt")).await;

    assert!(result.is_err());
}

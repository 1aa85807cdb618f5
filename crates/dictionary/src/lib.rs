use std::fmt;

use dictionary_api::fetch_word_data;
use random_word_api::get_random_words;
use synonym_api::fetch_synonyms;

mod dictionary;
mod dictionary_api;
mod random_word_api;
mod synonym_api;

pub use dictionary::{
    DictionaryEntry, DictionaryResponse, PartOfSpeech, Phonetic, Synonym, WordDefinition,
    WordMeaning,
};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
pub const SYNONYM_API_URL: &str = "https://api.datamuse.com/words?rel_syn=";
pub const RANDOM_WORD_API_URL: &str = "https://random-word-api.vercel.app/api";

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Failed to fetch Word")]
    Fetch(#[source] reqwest::Error),
    #[error("Failed to fetch Word")]
    Deserialize(#[source] reqwest::Error),
    #[error("Word not found in Dictionary")]
    NotFound(#[source] NotFoundError),
}

#[derive(Debug, thiserror::Error)]
pub enum SynonymError {
    #[error("Failed to fetch Synonym/s")]
    Fetch(#[source] reqwest::Error),
    #[error("Failed to fetch Synonym/s")]
    Deserialize(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RandomWordError {
    #[error("Failed to Fetch Random Word")]
    Fetch(#[source] reqwest::Error),
    #[error("Failed to Fetch Random Word")]
    Deserialize(#[source] reqwest::Error),
    #[error("the random word list was empty")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    message: String,
}

impl NotFoundError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for NotFoundError {}

impl From<NotFoundError> for DictionaryError {
    fn from(error: NotFoundError) -> Self {
        DictionaryError::NotFound(error)
    }
}

/// Base URLs of the three remote services. Words are appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub dictionary: String,
    pub synonyms: String,
    pub random_words: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            dictionary: DICTIONARY_API_URL.to_string(),
            synonyms: SYNONYM_API_URL.to_string(),
            random_words: RANDOM_WORD_API_URL.to_string(),
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn fetch_word_data(&self, word: &str) -> Result<DictionaryResponse, DictionaryError> {
        fetch_word_data(&self.client, &self.endpoints.dictionary, word).await
    }

    pub async fn fetch_synonyms(&self, word: &str) -> Result<Vec<Synonym>, SynonymError> {
        fetch_synonyms(&self.client, &self.endpoints.synonyms, word).await
    }

    pub async fn get_random_words(
        &self,
        max: usize,
        length: Option<usize>,
    ) -> Result<Vec<String>, RandomWordError> {
        get_random_words(&self.client, &self.endpoints.random_words, max, length).await
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

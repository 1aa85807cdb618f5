use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::NotFoundError;

/// Body returned by the dictionary API.
///
/// The API answers unknown words with a JSON object (and a 404), which is
/// still a valid body, so anything that is not a list of entries lands in
/// `Other` and is rejected by [`DictionaryResponse::first_entry`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DictionaryResponse {
    Entries(Vec<DictionaryEntry>),
    Other(serde_json::Value),
}

impl DictionaryResponse {
    /// First entry of the response, if it carries at least one meaning.
    pub fn first_entry(&self) -> Result<&DictionaryEntry, NotFoundError> {
        match self {
            DictionaryResponse::Entries(entries) => match entries.first() {
                Some(entry) if !entry.meanings.is_empty() => Ok(entry),
                Some(_) => Err(NotFoundError::new("the first entry has no meanings")),
                None => Err(NotFoundError::new("the response has no entries")),
            },
            DictionaryResponse::Other(value) => Err(NotFoundError::new(
                value
                    .get("title")
                    .and_then(|title| title.as_str())
                    .unwrap_or("unexpected response shape"),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub meanings: Vec<WordMeaning>,
}

impl DictionaryEntry {
    pub fn first_meaning(&self) -> Option<&WordMeaning> {
        self.meanings.first()
    }

    pub fn first_definition(&self) -> Option<&WordDefinition> {
        self.first_meaning()
            .and_then(|meaning| meaning.definitions.first())
    }

    /// Audio of the first phonetics entry, when the API gave one.
    pub fn first_audio(&self) -> Option<&str> {
        self.phonetics
            .first()
            .and_then(|phonetic| phonetic.audio.as_deref())
            .filter(|audio| !audio.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    #[serde(default)]
    pub part_of_speech: Option<PartOfSpeech>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub definitions: Vec<WordDefinition>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// Anything else the API reports, e.g. "exclamation" or "abbreviation".
    Other(String),
}

impl From<String> for PartOfSpeech {
    fn from(value: String) -> Self {
        match value.as_str() {
            "noun" => PartOfSpeech::Noun,
            "pronoun" => PartOfSpeech::Pronoun,
            "verb" => PartOfSpeech::Verb,
            "adjective" => PartOfSpeech::Adjective,
            "adverb" => PartOfSpeech::Adverb,
            "preposition" => PartOfSpeech::Preposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "interjection" => PartOfSpeech::Interjection,
            _ => PartOfSpeech::Other(value),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Other(other) => other,
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub antonyms: Vec<String>,
}

/// One result of the thesaurus API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Synonym {
    pub word: String,
    #[serde(default)]
    pub score: Option<f64>,
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

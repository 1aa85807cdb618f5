use dictionary::{DictionaryEntry, Synonym};

pub const DEFINITION_FALLBACK: &str = "Definition not available";
pub const NOT_AVAILABLE: &str = "Not available";
pub const EXAMPLE_FALLBACK: &str = "No example available";

/// Maximum number of synonyms shown under an entry.
pub const SYNONYM_LIMIT: usize = 5;

/// What gets shown for a looked up word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: String,
    pub meaning: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub example: String,
}

impl WordEntry {
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        phonetic: impl Into<String>,
        part_of_speech: impl Into<String>,
        example: Option<String>,
    ) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            phonetic: phonetic.into(),
            part_of_speech: part_of_speech.into(),
            example: example.unwrap_or_default(),
        }
    }

    /// Builds the entry for `input` out of the first dictionary result.
    ///
    /// The headword is always the user's input, the API's spelling of it is
    /// ignored. Missing or empty fields fall back to the fixed placeholders.
    pub fn from_lookup(input: &str, entry: &DictionaryEntry) -> Self {
        let meaning = entry.first_meaning();
        let definition = entry.first_definition();
        Self::new(
            input,
            non_empty(definition.and_then(|definition| definition.definition.clone()))
                .unwrap_or_else(|| DEFINITION_FALLBACK.to_string()),
            non_empty(entry.phonetic.clone()).unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            non_empty(
                meaning
                    .and_then(|meaning| meaning.part_of_speech.as_ref())
                    .map(|part_of_speech| part_of_speech.to_string()),
            )
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            Some(
                non_empty(definition.and_then(|definition| definition.example.clone()))
                    .unwrap_or_else(|| EXAMPLE_FALLBACK.to_string()),
            ),
        )
    }
}

/// A [`WordEntry`] together with its synonyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedWordEntry {
    pub entry: WordEntry,
    pub synonyms: Vec<String>,
}

impl ExtendedWordEntry {
    pub fn new(entry: WordEntry, synonyms: Vec<String>) -> Self {
        Self { entry, synonyms }
    }

    /// Keeps the first [`SYNONYM_LIMIT`] words in the order the API sent them.
    pub fn from_synonyms(entry: WordEntry, synonyms: &[Synonym]) -> Self {
        Self::new(
            entry,
            synonyms
                .iter()
                .take(SYNONYM_LIMIT)
                .map(|synonym| synonym.word.clone())
                .collect(),
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

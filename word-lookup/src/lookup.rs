use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use dictionary::{Dictionary, DictionaryError};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::audio::{audio_url, Sound};
use crate::entry::{ExtendedWordEntry, WordEntry};
use crate::panel::ResultsPanel;
use crate::render::{Block, Notice};

pub const DEFAULT_RANDOM_WORD_COUNT: usize = 10;

/// The text the user typed.
#[derive(Default)]
pub struct InputField {
    value: Mutex<String>,
}

impl InputField {
    pub fn value(&self) -> String {
        self.value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set(&self, value: impl Into<String>) {
        *self
            .value
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = value.into();
    }
}

/// Everything a lookup reads from or writes to.
pub struct Page<P> {
    pub input: InputField,
    pub panel: P,
    pub sound: Sound,
}

impl<P: ResultsPanel> Page<P> {
    pub fn new(panel: P) -> Self {
        Self {
            input: InputField::default(),
            panel,
            sound: Sound::new(),
        }
    }
}

/// Runs lookups against the dictionary and puts the results on a [`Page`].
///
/// Each trigger takes a ticket from a generation counter. Results are only
/// written while their ticket is the newest one, so a slow response can
/// never overwrite the result of a lookup started after it.
pub struct LookupOrchestrator {
    dictionary: Dictionary,
    generation: AtomicU64,
    random_word_count: usize,
}

impl LookupOrchestrator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            generation: AtomicU64::new(0),
            random_word_count: DEFAULT_RANDOM_WORD_COUNT,
        }
    }

    pub fn with_random_word_count(mut self, count: usize) -> Self {
        self.random_word_count = count.max(1);
        self
    }

    /// Looks up whatever is currently in the input field.
    pub async fn output<P: ResultsPanel>(&self, page: &Page<P>) {
        let ticket = self.begin();
        let input = page.input.value();
        let word = input.trim();
        if word.is_empty() {
            page.panel.replace(Block::Notice(Notice::EmptyInput));
            return;
        }
        self.lookup(ticket, word, page).await;
    }

    /// Fetches a word list, puts one of its words in the input field and looks it up.
    pub async fn random_word<P: ResultsPanel, R: Rng>(&self, page: &Page<P>, rng: &mut R) {
        let ticket = self.begin();
        let words = match self
            .dictionary
            .get_random_words(self.random_word_count, None)
            .await
        {
            Ok(words) => words,
            Err(error) => {
                tracing::error!(%error, "Failed to Fetch Random Word");
                if self.is_current(ticket) {
                    page.panel.replace(Block::Notice(Notice::RandomWordFailed));
                }
                return;
            }
        };
        let Some(word) = words
            .choose(rng)
            .map(|word| word.trim().to_string())
            .filter(|word| !word.is_empty())
        else {
            tracing::error!("Failed to Fetch Random Word: no usable word in the list");
            if self.is_current(ticket) {
                page.panel.replace(Block::Notice(Notice::RandomWordFailed));
            }
            return;
        };
        if !self.is_current(ticket) {
            tracing::debug!(word = %word, "dropping stale random word");
            return;
        }
        page.input.set(word.clone());
        self.lookup(ticket, &word, page).await;
    }

    async fn lookup<P: ResultsPanel>(&self, ticket: u64, word: &str, page: &Page<P>) {
        let (entry, audio) = match self.fetch_entry(word).await {
            Ok(found) => found,
            Err(error) => {
                tracing::warn!(%error, word, "Error fetching word data");
                if self.is_current(ticket) {
                    page.panel
                        .replace(Block::Notice(Notice::WordNotFound(word.to_string())));
                } else {
                    tracing::debug!(word, "dropping stale lookup failure");
                }
                return;
            }
        };
        if !self.is_current(ticket) {
            tracing::debug!(word, "dropping stale lookup");
            return;
        }
        page.panel.replace(Block::Entry(entry.clone()));
        match audio {
            Some(url) => page.sound.set_source(url),
            None => tracing::warn!(word, "Audio not Available for this Word."),
        }

        let block = match self.dictionary.fetch_synonyms(word).await {
            Ok(synonyms) => Block::Synonyms(ExtendedWordEntry::from_synonyms(entry, &synonyms)),
            Err(error) => {
                tracing::warn!(%error, word, "Error fetching synonyms");
                Block::SynonymsUnavailable
            }
        };
        if self.is_current(ticket) {
            page.panel.append(block);
        } else {
            tracing::debug!(word, "dropping stale synonyms");
        }
    }

    async fn fetch_entry(&self, word: &str) -> Result<(WordEntry, Option<String>), DictionaryError> {
        let response = self.dictionary.fetch_word_data(word).await?;
        let entry = response.first_entry()?;
        Ok((
            WordEntry::from_lookup(word, entry),
            entry.first_audio().and_then(audio_url),
        ))
    }

    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket
    }
}

use std::env;

use anyhow::Context;
use dictionary::Endpoints;

use crate::lookup::DEFAULT_RANDOM_WORD_COUNT;
use crate::render::Format;

pub struct Config {
    pub endpoints: Endpoints,
    /// How many words to ask the random word API for
    pub random_word_count: usize,
    /// External program used to play pronunciations
    pub audio_player: String,
    pub audio_player_args: Vec<String>,
    pub format: Format,
}

impl Config {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            dictionary: var("DICTIONARY_API_URL").unwrap_or(defaults.dictionary),
            synonyms: var("SYNONYM_API_URL").unwrap_or(defaults.synonyms),
            random_words: var("RANDOM_WORD_API_URL").unwrap_or(defaults.random_words),
        };

        let random_word_count = match var("RANDOM_WORD_COUNT") {
            Some(count) => count
                .trim()
                .parse()
                .with_context(|| format!("RANDOM_WORD_COUNT is not a number: {count:?}"))?,
            None => DEFAULT_RANDOM_WORD_COUNT,
        };

        let audio_player = var("AUDIO_PLAYER").unwrap_or_else(|| "mpv".to_string());
        let audio_player_args = var("AUDIO_PLAYER_ARGS")
            .unwrap_or_else(|| "--no-video".to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let format = match var("OUTPUT_FORMAT") {
            Some(format) => format.parse()?,
            None => Format::default(),
        };

        Ok(Config {
            endpoints,
            random_word_count,
            audio_player,
            audio_player_args,
            format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(config.random_word_count, DEFAULT_RANDOM_WORD_COUNT);
        assert_eq!(config.audio_player, "mpv");
        assert_eq!(config.audio_player_args, vec!["--no-video"]);
        assert_eq!(config.format, Format::Text);
    }

    #[test]
    fn overrides() {
        let config = config_with(&[
            ("SYNONYM_API_URL", "http://localhost:8000/words?rel_syn="),
            ("RANDOM_WORD_COUNT", " 3 "),
            ("AUDIO_PLAYER", "ffplay"),
            ("AUDIO_PLAYER_ARGS", "-nodisp -autoexit"),
            ("OUTPUT_FORMAT", "html"),
        ])
        .unwrap();
        assert_eq!(config.endpoints.synonyms, "http://localhost:8000/words?rel_syn=");
        assert_eq!(config.endpoints.dictionary, dictionary::DICTIONARY_API_URL);
        assert_eq!(config.random_word_count, 3);
        assert_eq!(config.audio_player_args, vec!["-nodisp", "-autoexit"]);
        assert_eq!(config.format, Format::Html);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_with(&[("RANDOM_WORD_COUNT", "many")]).is_err());
        assert!(config_with(&[("OUTPUT_FORMAT", "pdf")]).is_err());
    }
}

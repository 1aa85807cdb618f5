use std::str::FromStr;

use crate::entry::{ExtendedWordEntry, WordEntry};

pub const EMPTY_INPUT: &str = "PLEASE ENTER A WORD TO USE THE APP";
pub const RANDOM_WORD_FAILED: &str = "Failed to Fetch Random Word";
pub const NO_SYNONYMS: &str = "No synonyms found for this Word.";
pub const SYNONYMS_UNAVAILABLE: &str =
    "This word either has no synonyms or it failed to fetch some synonyms";

/// A piece of content in the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Notice(Notice),
    Entry(WordEntry),
    Synonyms(ExtendedWordEntry),
    SynonymsUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    WordNotFound(String),
    RandomWordFailed,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EmptyInput => EMPTY_INPUT.to_string(),
            Notice::WordNotFound(word) => format!("Could Not Find the Word: \"{word}\""),
            Notice::RandomWordFailed => RANDOM_WORD_FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(Format::Text),
            "html" => Ok(Format::Html),
            other => anyhow::bail!("unknown output format {other:?}, expected text or html"),
        }
    }
}

pub fn render(block: &Block, format: Format) -> String {
    match format {
        Format::Text => render_text(block),
        Format::Html => render_html(block),
    }
}

fn render_text(block: &Block) -> String {
    match block {
        Block::Notice(notice) => format!("{}\n", notice.message()),
        Block::Entry(entry) => {
            let mut out = format!("Showing definition for '{}':\n", entry.word);
            out.push_str(&format!(
                "    {}  /{}/\n",
                entry.part_of_speech, entry.phonetic
            ));
            out.push_str(&format!("        {}\n", entry.meaning));
            if !entry.example.is_empty() {
                out.push_str(&format!("          example: {}\n", entry.example));
            }
            out
        }
        Block::Synonyms(extended) if extended.synonyms.is_empty() => format!("    {NO_SYNONYMS}\n"),
        Block::Synonyms(extended) => {
            format!("    synonyms: {}\n", extended.synonyms.join(", "))
        }
        Block::SynonymsUnavailable => format!("    {SYNONYMS_UNAVAILABLE}\n"),
    }
}

fn render_html(block: &Block) -> String {
    match block {
        Block::Notice(notice @ Notice::RandomWordFailed) => {
            format!("<h3 class=\"error\">{}</h3>\n", escape(&notice.message()))
        }
        Block::Notice(notice) => format!(
            "<h3 class=\"error text-center\">{}</h3>\n",
            escape(&notice.message())
        ),
        Block::Entry(entry) => format!(
            concat!(
                "<div class=\"word d-flex justify-content-between\">\n",
                "  <h3>{word}</h3>\n",
                "  <button onclick=\"playSound()\">\n",
                "    <i class=\"bi bi-volume-up-fill\"></i>\n",
                "  </button>\n",
                "</div>\n",
                "<div class=\"word-details d-flex position-relative gap-3 mt-1 mb-4\">\n",
                "  <p>{part_of_speech}</p>\n",
                "  <p>/{phonetic}/</p>\n",
                "</div>\n",
                "<p class=\"word-definition\">{meaning}</p>\n",
                "<p class=\"word-example fst-italic ps-2 mt-3\">{example}</p>\n",
            ),
            word = escape(&entry.word),
            part_of_speech = escape(&entry.part_of_speech),
            phonetic = escape(&entry.phonetic),
            meaning = escape(&entry.meaning),
            example = escape(&entry.example),
        ),
        Block::Synonyms(extended) if extended.synonyms.is_empty() => {
            format!("<div class=\"synonyms mt-4\"><p>{NO_SYNONYMS}</p></div>\n")
        }
        Block::Synonyms(extended) => format!(
            concat!(
                "<div class=\"synonyms mt-4\">\n",
                "  <h4>Synonyms:</h4>\n",
                "  <p>{}</p>\n",
                "</div>\n",
            ),
            escape(&extended.synonyms.join(", "))
        ),
        Block::SynonymsUnavailable => format!("<h4>{SYNONYMS_UNAVAILABLE}</h4>\n"),
    }
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

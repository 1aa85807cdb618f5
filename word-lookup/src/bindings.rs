use rand::Rng;

use crate::audio::{play_sound, Playback};
use crate::lookup::{LookupOrchestrator, Page};
use crate::panel::ResultsPanel;

pub const HELP: &str = "\
Type a word and press enter to look it up.
    :search <word>   look up <word>
    :random, :r      look up a random word
    :play, :p        play the pronunciation of the last word
    :help, :h        show this message
    :quit, :q        leave";

/// What the user did, in terms of the widget's controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Enter pressed in the input field holding this text.
    EnterKey(String),
    /// Search button pressed after typing this text.
    SearchButton(String),
    RandomButton,
    SpeakerButton,
    Help,
    Quit,
    Unknown(String),
}

impl UiEvent {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return UiEvent::EnterKey(line.to_string());
        };
        let (name, rest) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));
        match &name.to_lowercase()[..] {
            "search" | "s" | "define" | "find" => UiEvent::SearchButton(rest.to_string()),
            "random" | "r" => UiEvent::RandomButton,
            "play" | "p" | "speak" => UiEvent::SpeakerButton,
            "help" | "h" | "?" => UiEvent::Help,
            "quit" | "q" | "exit" | "e" | "leave" | "l" => UiEvent::Quit,
            other => UiEvent::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub async fn dispatch<P: ResultsPanel, R: Rng>(
    event: UiEvent,
    orchestrator: &LookupOrchestrator,
    page: &Page<P>,
    player: &dyn Playback,
    rng: &mut R,
) -> Flow {
    match event {
        UiEvent::EnterKey(text) | UiEvent::SearchButton(text) => {
            page.input.set(text);
            orchestrator.output(page).await;
        }
        UiEvent::RandomButton => orchestrator.random_word(page, rng).await,
        UiEvent::SpeakerButton => play_sound(&page.sound, player),
        UiEvent::Help => println!("{HELP}"),
        UiEvent::Quit => return Flow::Quit,
        UiEvent::Unknown(command) => println!("Unknown command :{command}."),
    }
    Flow::Continue
}

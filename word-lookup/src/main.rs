use audio::CommandPlayer;
use bindings::{dispatch, Flow, UiEvent, HELP};
use clap::Parser;
use config::Config;
use dictionary::Dictionary;
use lookup::{LookupOrchestrator, Page};
use panel::TerminalPanel;
use render::Format;
use tracing_subscriber::EnvFilter;
use utilities::input;

mod audio;
mod bindings;
mod config;
mod entry;
mod lookup;
mod panel;
mod render;
mod utilities;

/// Look up definitions, pronunciations and synonyms of English words.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Look up this word and exit
    word: Option<String>,
    /// Look up a random word and exit
    #[arg(long, conflicts_with = "word")]
    random: bool,
    /// Print the widget's html markup instead of plain text
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new()?;
    let format = if args.html { Format::Html } else { config.format };
    tracing::debug!(endpoints = ?config.endpoints, ?format, "starting");

    let orchestrator = LookupOrchestrator::new(Dictionary::with_endpoints(config.endpoints))
        .with_random_word_count(config.random_word_count);
    let page = Page::new(TerminalPanel::new(format));
    let player = CommandPlayer::new(config.audio_player, config.audio_player_args);
    let mut rng = rand::thread_rng();

    if let Some(word) = args.word {
        dispatch(UiEvent::SearchButton(word), &orchestrator, &page, &player, &mut rng).await;
        return Ok(());
    }
    if args.random {
        dispatch(UiEvent::RandomButton, &orchestrator, &page, &player, &mut rng).await;
        return Ok(());
    }

    println!("{HELP}");
    while let Some(line) = input(">> ")? {
        let event = UiEvent::parse(&line);
        if dispatch(event, &orchestrator, &page, &player, &mut rng).await == Flow::Quit {
            break;
        }
    }
    Ok(())
}

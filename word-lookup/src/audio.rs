use std::io;
use std::process::Stdio;
use std::sync::Mutex;

/// Current pronunciation source, set by the last successful lookup.
#[derive(Default)]
pub struct Sound {
    source: Mutex<Option<String>>,
}

impl Sound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_source(&self, url: String) {
        *self.source.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(url);
    }

    pub fn source(&self) -> Option<String> {
        self.source
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

/// Turns the API's audio link into something playable.
///
/// Older dictionary entries use protocol relative links (`//ssl.gstatic.com/...`).
pub fn audio_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else if raw.starts_with("//") {
        Some(format!("https:{raw}"))
    } else {
        Some(raw.to_string())
    }
}

pub trait Playback {
    /// Starts playing `url`. Returning means playback started, not finished.
    fn play(&self, url: &str) -> io::Result<()>;
}

/// Plays audio through an external program, e.g. `mpv --no-video <url>`.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Playback for CommandPlayer {
    fn play(&self, url: &str) -> io::Result<()> {
        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {}
                Ok(status) => tracing::error!(%program, %status, "Error Audio"),
                Err(error) => tracing::error!(%program, %error, "Error Audio"),
            }
        });
        Ok(())
    }
}

/// Speaker button: plays the current source, failures are only logged.
pub fn play_sound(sound: &Sound, player: &dyn Playback) {
    match sound.source().filter(|source| !source.is_empty()) {
        Some(source) => {
            if let Err(error) = player.play(&source) {
                tracing::error!(%error, source = %source, "Error Audio");
            }
        }
        None => tracing::error!("Audio Not Found"),
    }
}

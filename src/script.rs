//! Word interpreter
//!
//! Drives the command facade from a flat list of words, as typed on a command
//! line:
//!
//! ```text
//! white 0.5 flash: red 0.1 black 0.1 flash. 3*flash rainbow spinner
//! ```
//!
//! * a number pauses for that many seconds;
//! * `name:` records the following words as a macro until `name.`;
//! * `N*word` repeats `word` N times;
//! * `sample <path>` plays an image column by column;
//! * patterns (`rainbow`, `spinner`, `strobe`, `off`) and color names apply
//!   instantly. Any CSS color name is accepted.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use image::ImageError;

use crate::color::{self, BLACK};
use crate::command::{Commands, DEFAULT_BLEND_TIME, DEFAULT_STROBE_COLOR, DEFAULT_STROBE_TIME};
use crate::error::EngineError;
use crate::sample;

/// Maximum macro nesting depth
pub const MAX_DEPTH: usize = 16;

const PATTERN_RAINBOW: &str = "rainbow";
const PATTERN_SPINNER: &str = "spinner";
const PATTERN_STROBE: &str = "strobe";
const PATTERN_OFF: &str = "off";
const SAMPLE: &str = "sample";

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("invalid repeat count in `{0}`")]
    InvalidRepeat(String),
    #[error("macro nesting deeper than {MAX_DEPTH} levels")]
    RecursionLimit,
    #[error("failed to load sample `{path}`: {source}")]
    Sample {
        path: String,
        #[source]
        source: ImageError,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Stateful interpreter; macros persist across calls
pub struct Interpreter {
    commands: Commands,
    macros: HashMap<String, Vec<String>>,
    recording: Option<String>,
    sampling: bool,
}

impl Interpreter {
    pub fn new(commands: Commands) -> Self {
        Self {
            commands,
            macros: HashMap::new(),
            recording: None,
            sampling: false,
        }
    }

    /// Run every word in order, stopping at the first error
    pub fn run<I, S>(&mut self, words: I) -> Result<(), ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.handle(word.as_ref())?;
        }
        Ok(())
    }

    /// Run a single word
    pub fn handle(&mut self, word: &str) -> Result<(), ScriptError> {
        self.handle_at(word.trim(), 0)
    }

    /// Macro currently being recorded
    pub fn recording(&self) -> Option<&str> {
        self.recording.as_deref()
    }

    /// Words recorded for a macro
    pub fn macro_words(&self, name: &str) -> Option<&[String]> {
        self.macros.get(name).map(Vec::as_slice)
    }

    fn handle_at(&mut self, word: &str, depth: usize) -> Result<(), ScriptError> {
        if depth > MAX_DEPTH {
            return Err(ScriptError::RecursionLimit);
        }
        if word.is_empty() {
            return Ok(());
        }

        if let Some(name) = self.recording.as_deref() {
            if word.strip_suffix('.') == Some(name) {
                debug!("recorded macro `{name}`");
                self.recording = None;
            } else {
                let name = name.to_owned();
                self.macros.entry(name).or_default().push(word.to_owned());
            }
            return Ok(());
        }

        if let Ok(seconds) = word.parse::<f64>() {
            self.commands.pause(seconds)?;
            return Ok(());
        }

        if self.sampling {
            self.sampling = false;
            return self.play_sample(word);
        }

        let word = word.to_lowercase();

        if let Some(name) = word.strip_suffix(':') {
            self.macros.insert(name.to_owned(), Vec::new());
            self.recording = Some(name.to_owned());
            return Ok(());
        }

        if let Some((count, rest)) = word.split_once('*') {
            let count: u32 = count
                .trim()
                .parse()
                .map_err(|_| ScriptError::InvalidRepeat(word.clone()))?;
            for _ in 0..count {
                self.handle_at(rest.trim(), depth + 1)?;
            }
            return Ok(());
        }

        if word == SAMPLE {
            self.sampling = true;
            return Ok(());
        }

        if let Some(words) = self.macros.get(&word).cloned() {
            for macro_word in &words {
                self.handle_at(macro_word, depth + 1)?;
            }
            return Ok(());
        }

        match word.as_str() {
            PATTERN_RAINBOW => self.commands.rainbow(0.0)?,
            PATTERN_SPINNER => self.commands.spinner(DEFAULT_BLEND_TIME)?,
            PATTERN_STROBE => {
                self.commands
                    .strobe(1, DEFAULT_STROBE_TIME, DEFAULT_STROBE_COLOR)?;
            }
            PATTERN_OFF => self.commands.rgb(BLACK, None, 0.0)?,
            name => {
                let color = color::lookup(name)
                    .ok_or_else(|| ScriptError::UnknownCommand(name.to_owned()))?;
                self.commands.rgb(color, None, 0.0)?;
            }
        }
        Ok(())
    }

    fn play_sample(&self, path: &str) -> Result<(), ScriptError> {
        let led_count = self.commands.engine().led_count();
        let frames = sample::load(path, led_count).map_err(|source| ScriptError::Sample {
            path: path.to_owned(),
            source,
        })?;
        self.commands.frames(frames)?;
        Ok(())
    }
}

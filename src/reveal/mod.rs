//! Progressive text reveal (the typewriter effect).
//!
//! A [`TextRevealer`] is re-entered on every tick of whatever timer owns it.
//! The state machine here is fully deterministic; only the delay between
//! ticks is randomized, and only in human mode.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which timing profile drives the reveal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RevealSpeed {
    /// One character per tick with per-character-class pauses, imitating a
    /// person typing. Reveals the literal next character, mid-word included.
    Human,
    /// A fixed chunk of characters per fixed-interval tick, matching the
    /// pacing of an upstream token stream. The displayed prefix snaps back
    /// to the last word boundary so partial words never flash on screen.
    Stream,
}

/// Inclusive delay band in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseBand {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl PauseBand {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    fn sample(self) -> Duration {
        let mut rng = rand::rng();
        Duration::from_millis(rng.random_range(self.min_ms..=self.max_ms))
    }
}

/// Pacing parameters for both speed modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Default speed for new sessions; the CLI can override per run.
    pub speed: RevealSpeed,
    /// Delay after an ordinary character.
    pub human_base: PauseBand,
    /// Delay after a space or dash.
    pub human_word: PauseBand,
    /// Delay after sentence punctuation.
    pub human_punct: PauseBand,
    /// Characters advanced per stream tick.
    pub stream_chunk: usize,
    /// Fixed interval between stream ticks.
    pub stream_interval_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed: RevealSpeed::Stream,
            human_base: PauseBand::new(18, 42),
            human_word: PauseBand::new(45, 90),
            human_punct: PauseBand::new(180, 320),
            stream_chunk: 3,
            stream_interval_ms: 65,
        }
    }
}

/// One reveal tick's visible result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealFrame {
    pub visible: String,
    pub done: bool,
}

const SENTENCE_PUNCT: &str = ".,;:!?";

/// Progressive reveal state for a single message.
///
/// Owned by the session controller for as long as the message is on screen;
/// dropped when the message leaves the projection (the scrub-backward case)
/// so a returning message always starts from scratch.
#[derive(Debug)]
pub struct TextRevealer {
    speed: RevealSpeed,
    config: RevealConfig,
    text: String,
    chars: Vec<char>,
    cursor: usize,
    active: bool,
    done: bool,
    settled: bool,
}

impl TextRevealer {
    pub fn new(speed: RevealSpeed, config: RevealConfig) -> Self {
        Self {
            speed,
            config,
            text: String::new(),
            chars: Vec::new(),
            cursor: 0,
            active: false,
            done: false,
            settled: false,
        }
    }

    /// One tick. Re-entered on every tick of the owning timer.
    ///
    /// `active` false shows the full text immediately; `active` transitioning
    /// to true restarts the reveal from length zero; a change of target text
    /// restarts unconditionally. `on_grow` fires on every tick while still
    /// revealing and once more on completion, never after `done` settles —
    /// callers use it to keep a scrolled view pinned to the growing bottom.
    pub fn reveal(&mut self, text: &str, active: bool, on_grow: &mut dyn FnMut()) -> RevealFrame {
        if text != self.text {
            self.text = text.to_owned();
            self.chars = text.chars().collect();
            self.restart();
        }
        if active && !self.active {
            self.restart();
        }
        self.active = active;

        if !active {
            self.cursor = self.chars.len();
            self.done = true;
            let frame = RevealFrame {
                visible: self.text.clone(),
                done: true,
            };
            self.notify(on_grow);
            return frame;
        }

        if self.done {
            let frame = RevealFrame {
                visible: self.visible_text(),
                done: true,
            };
            // Only an empty target lands here unsettled; its completion
            // still owes the caller one growth callback.
            self.notify(on_grow);
            return frame;
        }

        let step = match self.speed {
            RevealSpeed::Human => 1,
            RevealSpeed::Stream => self.config.stream_chunk.max(1),
        };
        self.cursor = (self.cursor + step).min(self.chars.len());
        self.done = self.cursor >= self.chars.len();

        let frame = RevealFrame {
            visible: self.visible_text(),
            done: self.done,
        };
        self.notify(on_grow);
        frame
    }

    /// Delay before the next tick; `None` once done or inactive.
    pub fn next_delay(&self) -> Option<Duration> {
        if !self.active || self.done {
            return None;
        }
        Some(match self.speed {
            RevealSpeed::Stream => Duration::from_millis(self.config.stream_interval_ms),
            RevealSpeed::Human => self.pause_after_last_char(),
        })
    }

    fn pause_after_last_char(&self) -> Duration {
        let band = match self.last_char() {
            Some(c) if SENTENCE_PUNCT.contains(c) => self.config.human_punct,
            Some(c) if c == ' ' || c == '-' => self.config.human_word,
            _ => self.config.human_base,
        };
        band.sample()
    }

    fn last_char(&self) -> Option<char> {
        self.cursor.checked_sub(1).map(|i| self.chars[i])
    }

    fn visible_text(&self) -> String {
        if self.done {
            return self.text.clone();
        }
        match self.speed {
            RevealSpeed::Human => self.chars[..self.cursor].iter().collect(),
            // Snap back to the last word boundary at or before the cursor.
            RevealSpeed::Stream => match self.chars[..self.cursor]
                .iter()
                .rposition(|c| *c == ' ')
            {
                Some(space) => self.chars[..=space].iter().collect(),
                None => String::new(),
            },
        }
    }

    fn restart(&mut self) {
        self.cursor = 0;
        self.done = self.chars.is_empty();
        self.settled = false;
    }

    fn notify(&mut self, on_grow: &mut dyn FnMut()) {
        if self.settled {
            return;
        }
        on_grow();
        if self.done {
            self.settled = true;
        }
    }
}

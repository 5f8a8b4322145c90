//! Types a list of phrases one character at a time, deletes them, and moves
//! on to the next phrase.

use core::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    /// How long a completed phrase stays on screen.
    pub hold: Duration,
    /// Pause on the empty line before the next phrase starts.
    pub gap: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(90),
            delete_delay: Duration::from_millis(45),
            hold: Duration::from_millis(1_600),
            gap: Duration::from_millis(400),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<&'static str>,
    timing: TypewriterTiming,
    index: usize,
    /// Number of characters of the current phrase on screen.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &[&'static str]) -> Self {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing(phrases: &[&'static str], timing: TypewriterTiming) -> Self {
        Self {
            phrases: phrases.to_vec(),
            timing,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    pub const fn phrase_index(&self) -> usize {
        self.index
    }

    /// Advances one step and returns the new visible text.
    pub fn tick(&mut self) -> &'static str {
        if self.phrases.is_empty() {
            return "";
        }
        let len = self.phrase().chars().count();
        match self.phase {
            Phase::Typing if self.shown < len => self.shown += 1,
            Phase::Typing => self.phase = Phase::Holding,
            Phase::Holding => self.phase = Phase::Deleting,
            Phase::Deleting if self.shown > 0 => self.shown -= 1,
            Phase::Deleting => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
            }
        }
        self.text()
    }

    /// How long to wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_delay,
            Phase::Holding => self.timing.hold,
            Phase::Deleting if self.shown > 0 => self.timing.delete_delay,
            Phase::Deleting => self.timing.gap,
        }
    }
}

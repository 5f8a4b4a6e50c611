use std::time::Duration;

pub const DEFAULT_TYPE_SPEED: Duration = Duration::from_millis(100);
pub const DEFAULT_HOLD: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Cycles through phrases one character at a time.
///
/// The caller sleeps for whatever [`Typewriter::step`] returns and calls it
/// again; nothing here owns a clock.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    speed: Duration,
    hold: Duration,
    index: usize,
    visible: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            speed: DEFAULT_TYPE_SPEED,
            hold: DEFAULT_HOLD,
            index: 0,
            visible: 0,
            phase: Phase::Typing,
        }
    }

    pub fn speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Currently visible prefix of the active phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.index) else {
            return "";
        };

        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advances one frame and returns how long to wait before the next one.
    pub fn step(&mut self) -> Duration {
        let Some(phrase) = self.phrases.get(self.index) else {
            return self.hold;
        };
        let len = phrase.chars().count();

        match self.phase {
            Phase::Typing if self.visible < len => {
                self.visible += 1;
                self.speed
            }
            Phase::Typing => {
                self.phase = Phase::Holding;
                self.hold
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.speed / 2
            }
            Phase::Deleting if self.visible > 0 => {
                self.visible -= 1;
                self.speed / 2
            }
            Phase::Deleting => {
                self.phase = Phase::Typing;
                self.index = (self.index + 1) % self.phrases.len();
                self.speed
            }
        }
    }
}

//! Typewriter headline: reveals a phrase one character at a time, holds it,
//! deletes it at double speed and moves on to the next phrase forever.
//!
//! [`TypingAnimator`] is the bare state machine; [`Playback`] multiplexes its
//! step schedule with the cursor blink on a logical clock so the host only
//! ever needs one pending timer.

use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_SPEED: Duration = Duration::from_millis(150);
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1500);
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

const CURSOR: char = '|';
const CURSOR_HIDDEN: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingConfig {
    pub phrases: Vec<String>,
    pub speed: Duration,
    pub pause: Duration,
    pub blink_interval: Duration,
}

impl TypingConfig {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            speed: DEFAULT_SPEED,
            pause: DEFAULT_PAUSE,
            blink_interval: DEFAULT_BLINK_INTERVAL,
        }
    }

    pub fn speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn blink_interval(mut self, blink_interval: Duration) -> Self {
        self.blink_interval = blink_interval;
        self
    }

    /// A zero pause is allowed; a zero speed or blink interval would spin.
    pub fn validate(&self) -> Result<()> {
        if self.speed.is_zero() {
            return Err(Error::InvalidDuration { field: "speed" });
        }
        if self.blink_interval.is_zero() {
            return Err(Error::InvalidDuration {
                field: "blink_interval",
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    /// No phrases to show.
    Idle,
    Growing { phrase: usize, chars: usize },
    /// Full phrase on screen, waiting for the pause to run out.
    Held { phrase: usize, chars: usize },
    Shrinking { phrase: usize, chars: usize },
}

#[derive(Debug, Clone)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    // char counts, not byte lengths
    lengths: Vec<usize>,
    speed: Duration,
    pause: Duration,
    blink_interval: Duration,
    state: TypingState,
    cursor_visible: bool,
}

impl TypingAnimator {
    pub fn new(config: TypingConfig) -> Result<Self> {
        config.validate()?;
        let TypingConfig {
            phrases,
            speed,
            pause,
            blink_interval,
        } = config;
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        let state = if phrases.is_empty() {
            log::warn!("typing animator has no phrases, staying idle");
            TypingState::Idle
        } else {
            TypingState::Growing {
                phrase: 0,
                chars: 0,
            }
        };
        Ok(Self {
            phrases,
            lengths,
            speed,
            pause,
            blink_interval,
            state,
            cursor_visible: true,
        })
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == TypingState::Idle
    }

    pub fn phrase_index(&self) -> usize {
        match self.state {
            TypingState::Idle => 0,
            TypingState::Growing { phrase, .. }
            | TypingState::Held { phrase, .. }
            | TypingState::Shrinking { phrase, .. } => phrase,
        }
    }

    pub fn char_count(&self) -> usize {
        match self.state {
            TypingState::Idle => 0,
            TypingState::Growing { chars, .. }
            | TypingState::Held { chars, .. }
            | TypingState::Shrinking { chars, .. } => chars,
        }
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.state, TypingState::Shrinking { .. })
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn blink_interval(&self) -> Duration {
        self.blink_interval
    }

    /// How long the current state lasts before the next [`tick`](Self::tick).
    pub fn next_delay(&self) -> Option<Duration> {
        match self.state {
            TypingState::Idle => None,
            TypingState::Growing { .. } => Some(self.speed),
            // an extra reveal tick, the pause, then an extra delete tick,
            // all with the whole phrase still on screen
            TypingState::Held { .. } => Some(self.speed + self.pause + self.speed / 2),
            TypingState::Shrinking { .. } => Some(self.speed / 2),
        }
    }

    /// Performs one transition and returns the delay before the next one.
    pub fn tick(&mut self) -> Option<Duration> {
        self.state = match self.state {
            TypingState::Idle => TypingState::Idle,
            TypingState::Growing { phrase, chars } => {
                let len = self.lengths[phrase];
                let chars = (chars + 1).min(len);
                if chars == len {
                    TypingState::Held { phrase, chars }
                } else {
                    TypingState::Growing { phrase, chars }
                }
            }
            TypingState::Held { phrase, chars } => {
                if chars == 0 {
                    self.advance(phrase)
                } else {
                    TypingState::Shrinking { phrase, chars }
                }
            }
            TypingState::Shrinking { phrase, chars } => {
                let chars = chars.saturating_sub(1);
                if chars == 0 {
                    self.advance(phrase)
                } else {
                    TypingState::Shrinking { phrase, chars }
                }
            }
        };
        self.next_delay()
    }

    fn advance(&self, phrase: usize) -> TypingState {
        let phrase = (phrase + 1) % self.phrases.len();
        log::debug!("typing animator moving to phrase {phrase}");
        TypingState::Growing { phrase, chars: 0 }
    }

    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// The revealed part of the current phrase.
    pub fn prefix(&self) -> &str {
        if self.is_idle() {
            return "";
        }
        let phrase = &self.phrases[self.phrase_index()];
        match phrase.char_indices().nth(self.char_count()) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn display(&self) -> String {
        if self.is_idle() {
            return String::new();
        }
        let cursor = if self.cursor_visible {
            CURSOR
        } else {
            CURSOR_HIDDEN
        };
        format!("{}{}", self.prefix(), cursor)
    }
}

/// Drives a [`TypingAnimator`] and its cursor blink on a logical clock.
///
/// Each schedule is a countdown slot. The host sleeps for [`next_wake`],
/// then reports the elapsed time through [`advance`]. Once [`stop`] is called
/// both slots are disarmed and nothing mutates anymore.
///
/// [`next_wake`]: Playback::next_wake
/// [`advance`]: Playback::advance
/// [`stop`]: Playback::stop
#[derive(Debug, Clone)]
pub struct Playback {
    animator: TypingAnimator,
    until_step: Option<Duration>,
    until_blink: Option<Duration>,
}

impl Playback {
    pub fn start(animator: TypingAnimator) -> Self {
        let until_step = animator.next_delay();
        let until_blink = if animator.is_idle() {
            None
        } else {
            Some(animator.blink_interval())
        };
        Self {
            animator,
            until_step,
            until_blink,
        }
    }

    pub fn animator(&self) -> &TypingAnimator {
        &self.animator
    }

    pub fn display(&self) -> String {
        self.animator.display()
    }

    pub fn is_running(&self) -> bool {
        self.until_step.is_some() || self.until_blink.is_some()
    }

    pub fn next_wake(&self) -> Option<Duration> {
        match (self.until_step, self.until_blink) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Lets `elapsed` pass, firing every due event in order. Returns whether
    /// the display changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = self.animator.display();
        let mut remaining = elapsed;
        while let Some(wake) = self.next_wake() {
            if wake > remaining {
                break;
            }
            remaining -= wake;
            self.until_step = self.until_step.map(|d| d - wake);
            self.until_blink = self.until_blink.map(|d| d - wake);
            if self.until_step == Some(Duration::ZERO) {
                self.until_step = self.animator.tick();
            }
            if self.until_blink == Some(Duration::ZERO) {
                self.animator.blink();
                self.until_blink = Some(self.animator.blink_interval());
            }
        }
        self.until_step = self.until_step.map(|d| d - remaining);
        self.until_blink = self.until_blink.map(|d| d - remaining);
        self.animator.display() != before
    }

    pub fn stop(&mut self) {
        self.until_step = None;
        self.until_blink = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(TypingConfig::new(phrases.iter().copied()))
            .expect("default config should be valid")
    }

    #[test]
    fn test_config_defaults() {
        let config = TypingConfig::new(["a"]);
        assert_eq!(config.speed, ms(150));
        assert_eq!(config.pause, ms(1500));
        assert_eq!(config.blink_interval, ms(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_durations() {
        let err = TypingAnimator::new(TypingConfig::new(["a"]).speed(Duration::ZERO))
            .expect_err("zero speed should be rejected");
        assert_eq!(err, Error::InvalidDuration { field: "speed" });

        let err = TypingAnimator::new(TypingConfig::new(["a"]).blink_interval(Duration::ZERO))
            .expect_err("zero blink interval should be rejected");
        assert_eq!(
            err,
            Error::InvalidDuration {
                field: "blink_interval"
            }
        );

        // no pause is fine
        assert!(TypingAnimator::new(TypingConfig::new(["a"]).pause(Duration::ZERO)).is_ok());
    }

    #[test]
    fn test_initial_state() {
        let a = animator(&["Hello"]);
        assert_eq!(a.phrase_index(), 0);
        assert_eq!(a.char_count(), 0);
        assert!(!a.is_deleting());
        assert!(a.cursor_visible());
        assert_eq!(a.display(), "|");
    }

    #[test]
    fn test_full_cycle_single_phrase() {
        let mut a = animator(&["abc"]);

        // growing
        for expected in 1..=3 {
            a.tick();
            assert_eq!(a.char_count(), expected);
        }
        assert_eq!(a.state(), TypingState::Held { phrase: 0, chars: 3 });
        assert_eq!(a.next_delay(), Some(ms(150 + 1500 + 75)));
        assert_eq!(a.prefix(), "abc");

        // hold ends, shrinking starts from the full phrase
        assert_eq!(a.tick(), Some(ms(75)));
        assert_eq!(a.state(), TypingState::Shrinking { phrase: 0, chars: 3 });
        assert!(a.is_deleting());

        a.tick();
        a.tick();
        assert_eq!(a.prefix(), "a");
        a.tick();

        // wraps straight back to growing the same phrase
        assert_eq!(a.state(), TypingState::Growing { phrase: 0, chars: 0 });
        assert!(!a.is_deleting());
    }

    #[test]
    fn test_phrase_index_advances_by_one() {
        let mut a = animator(&["ab", "xyz", "q"]);
        let mut seen = Vec::new();
        for _ in 0..100 {
            a.tick();
            if a.char_count() == 0 && !a.is_deleting() {
                seen.push(a.phrase_index());
            }
        }
        assert!(seen.len() > 6);
        for pair in seen.windows(2) {
            assert_eq!(pair[1], (pair[0] + 1) % 3);
        }
        // every phrase shows up
        for i in 0..3 {
            assert!(seen.contains(&i));
        }
    }

    #[test]
    fn test_char_count_stays_in_bounds() {
        let phrases = ["", "a", "Rust", "Shakir Afghan"];
        let mut a = animator(&phrases);
        for _ in 0..500 {
            a.tick();
            let len = phrases[a.phrase_index()].chars().count();
            assert!(a.char_count() <= len);
        }
    }

    #[test]
    fn test_empty_phrase_passes_through() {
        let mut a = animator(&["", "b"]);
        a.tick();
        assert_eq!(a.state(), TypingState::Held { phrase: 0, chars: 0 });
        a.tick();
        assert_eq!(a.state(), TypingState::Growing { phrase: 1, chars: 0 });
    }

    #[test]
    fn test_multibyte_reveal() {
        let mut a = animator(&["héllo→"]);
        a.tick();
        a.tick();
        assert_eq!(a.prefix(), "hé");
        for _ in 0..4 {
            a.tick();
        }
        assert_eq!(a.prefix(), "héllo→");
    }

    #[test]
    fn test_no_phrases_is_idle() {
        let mut a = animator(&[]);
        assert!(a.is_idle());
        assert_eq!(a.display(), "");
        assert_eq!(a.tick(), None);
        assert_eq!(a.prefix(), "");

        let p = Playback::start(a);
        assert!(!p.is_running());
        assert_eq!(p.next_wake(), None);
    }

    #[test]
    fn test_blink_leaves_typing_state_alone() {
        let mut a = animator(&["abc"]);
        a.tick();
        let state = a.state();
        for n in 1..=7 {
            a.blink();
            assert_eq!(a.cursor_visible(), n % 2 == 0);
            assert_eq!(a.state(), state);
        }
        assert_eq!(a.display(), "a ");
    }

    #[test]
    fn test_playback_timing() {
        let mut p = Playback::start(animator(&["ab"]));
        assert_eq!(p.next_wake(), Some(ms(150)));

        assert!(!p.advance(ms(149)));
        assert_eq!(p.animator().char_count(), 0);
        assert!(p.advance(ms(1)));
        assert_eq!(p.animator().char_count(), 1);

        p.advance(ms(150));
        assert!(matches!(p.animator().state(), TypingState::Held { .. }));

        // blink fired at 500ms in between, cursor hidden
        p.advance(ms(200));
        assert!(!p.animator().cursor_visible());

        // 1725ms hold measured from 300ms
        p.advance(ms(1524));
        assert!(matches!(p.animator().state(), TypingState::Held { .. }));
        p.advance(ms(1));
        assert!(p.animator().is_deleting());
        p.advance(ms(75));
        assert_eq!(p.animator().char_count(), 1);
    }

    #[test]
    fn test_full_phrase_shown_for_two_steps_and_pause() {
        let mut p = Playback::start(animator(&["ab"]));
        let mut now = 0;
        let mut shown_at = None;
        loop {
            p.advance(ms(1));
            now += 1;
            let chars = p.animator().char_count();
            if chars == 2 && shown_at.is_none() {
                shown_at = Some(now);
            }
            if chars == 1 && shown_at.is_some() {
                break;
            }
            assert!(now < 10_000, "phrase never started deleting");
        }
        // 2 * speed + pause
        assert_eq!(now - shown_at.unwrap(), 1800);
    }

    #[test]
    fn test_step_and_blink_due_together() {
        let mut p = Playback::start(animator(&["Shakir Afghan"]));
        p.advance(ms(1499));
        assert_eq!(p.animator().char_count(), 9);
        assert!(p.animator().cursor_visible());

        // 1500ms is both the 10th reveal step and the 3rd blink
        assert!(p.advance(ms(1)));
        assert_eq!(p.animator().char_count(), 10);
        assert!(!p.animator().cursor_visible());
        assert_eq!(p.next_wake(), Some(ms(150)));
    }

    #[test]
    fn test_playback_blink_only() {
        // step schedule pushed far out so only blinks fire
        let a = TypingAnimator::new(TypingConfig::new(["abc"]).speed(Duration::from_secs(3600)))
            .expect("config should be valid");
        let mut p = Playback::start(a);
        let mut toggles = 0;
        let mut visible = p.animator().cursor_visible();
        for _ in 0..9 {
            p.advance(ms(500));
            if p.animator().cursor_visible() != visible {
                toggles += 1;
                visible = p.animator().cursor_visible();
            }
            assert_eq!(p.animator().char_count(), 0);
            assert!(!p.animator().is_deleting());
        }
        assert_eq!(toggles, 9);
    }

    #[test]
    fn test_playback_large_jump_fires_everything() {
        let mut a = animator(&["abc"]);
        let mut p = Playback::start(a.clone());
        p.advance(ms(450));
        for _ in 0..3 {
            a.tick();
        }
        assert_eq!(p.animator().state(), a.state());
    }

    #[test]
    fn test_stopped_playback_never_mutates() {
        let mut p = Playback::start(animator(&["hello", "world"]));
        p.advance(ms(320));
        let snapshot = (
            p.animator().state(),
            p.animator().cursor_visible(),
            p.display(),
        );
        p.stop();
        assert!(!p.is_running());
        for _ in 0..10 {
            assert!(!p.advance(ms(1000)));
        }
        assert_eq!(
            snapshot,
            (
                p.animator().state(),
                p.animator().cursor_visible(),
                p.display()
            )
        );
    }
}

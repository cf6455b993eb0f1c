//! Typewriter text with glitch pulses.
//!
//! The machine reveals its target one character per reveal tick. While
//! revealing, each tick may start a glitch pulse; once the whole target is
//! shown the machine is idle and only periodic pulses remain. Time is passed
//! in explicitly as milliseconds so the caller decides what the clock is.

use rand::Rng;

pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterTiming {
    /// Period of the reveal tick.
    pub reveal_ms: u32,
    /// Chance that a reveal tick starts a glitch pulse.
    pub glitch_chance: f64,
    /// How long a single pulse keeps the glitch flag set.
    pub pulse_ms: u32,
    /// Period of the pulses once the text is fully revealed.
    pub idle_ms: u32,
}

impl TypewriterTiming {
    pub fn roll_glitch<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.glitch_chance.clamp(0.0, 1.0))
    }

    pub fn pulse_deadline(&self, now: Millis) -> Millis {
        now + self.pulse_ms as Millis
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Revealing,
    Idle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    target: String,
    // Byte length of the revealed prefix, always on a char boundary.
    revealed: usize,
    glitch_until: Option<Millis>,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(target: impl Into<String>, timing: &TypewriterTiming) -> Self {
        Self {
            target: target.into(),
            revealed: 0,
            glitch_until: None,
            timing: *timing,
        }
    }

    /// Start over with a new target. Progress and any running pulse are dropped.
    pub fn reset(&mut self, target: impl Into<String>) {
        self.target = target.into();
        self.revealed = 0;
        self.glitch_until = None;
    }

    pub fn phase(&self) -> Phase {
        if self.revealed == self.target.len() {
            Phase::Idle
        } else {
            Phase::Revealing
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn revealed_text(&self) -> &str {
        &self.target[..self.revealed]
    }

    pub fn is_glitching(&self) -> bool {
        self.glitch_until.is_some()
    }

    /// Reveal the next character. Returns the pulse deadline when `glitch`
    /// started a pulse. Does nothing once the target is fully revealed.
    pub fn reveal(&mut self, now: Millis, glitch: bool) -> Option<Millis> {
        let next = self.target[self.revealed..].chars().next()?;
        self.revealed += next.len_utf8();
        glitch.then(|| self.pulse(now))
    }

    /// Periodic pulse of the idle phase. Ignored while still revealing.
    pub fn idle_tick(&mut self, now: Millis) -> Option<Millis> {
        match self.phase() {
            Phase::Idle => Some(self.pulse(now)),
            Phase::Revealing => None,
        }
    }

    /// Set the glitch flag until `now + pulse_ms`. A pulse never shortens
    /// one that is already running. Returns the deadline in effect.
    pub fn pulse(&mut self, now: Millis) -> Millis {
        let until = self.timing.pulse_deadline(now);
        let until = self.glitch_until.map_or(until, |current| current.max(until));
        self.glitch_until = Some(until);
        until
    }

    /// Clear the glitch flag if its deadline has passed at `now`.
    pub fn settle(&mut self, now: Millis) {
        if self.glitch_until.is_some_and(|until| until <= now) {
            self.glitch_until = None;
        }
    }
}

/// Random lowercase letters shown behind the text while it glitches.
pub fn noise<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TIMING: TypewriterTiming = TypewriterTiming {
        reveal_ms: 100,
        glitch_chance: 0.3,
        pulse_ms: 100,
        idle_ms: 3000,
    };

    fn run_reveals(typewriter: &mut Typewriter, ticks: usize) {
        for i in 0..ticks {
            typewriter.reveal(i as Millis * TIMING.reveal_ms as Millis, false);
        }
    }

    #[test]
    fn test_reveals_one_char_per_tick_then_idles() {
        let mut typewriter = Typewriter::new(">> INIT", &TIMING);
        assert_eq!(typewriter.phase(), Phase::Revealing);
        assert_eq!(typewriter.revealed_text(), "");

        for k in 1..=7 {
            typewriter.reveal(0, false);
            assert_eq!(typewriter.revealed_text(), &">> INIT"[..k]);
        }
        assert_eq!(typewriter.revealed_text(), ">> INIT");
        assert_eq!(typewriter.phase(), Phase::Idle);

        assert_eq!(typewriter.reveal(0, true), None);
        assert_eq!(typewriter.revealed_text(), ">> INIT");
        assert!(!typewriter.is_glitching());
    }

    #[test]
    fn test_prefix_stays_on_char_boundaries() {
        let target = "ÿ→ 6.0 ✓";
        let mut typewriter = Typewriter::new(target, &TIMING);
        let chars: Vec<char> = target.chars().collect();
        for k in 1..=chars.len() {
            typewriter.reveal(0, false);
            let expected: String = chars[..k].iter().collect();
            assert_eq!(typewriter.revealed_text(), expected);
        }
        run_reveals(&mut typewriter, 5);
        assert_eq!(typewriter.revealed_text(), target);
    }

    #[test]
    fn test_reset_restarts_from_empty() {
        let mut typewriter = Typewriter::new(">> INITIALIZING", &TIMING);
        run_reveals(&mut typewriter, 4);
        typewriter.pulse(400);
        typewriter.reset("BOOT");

        assert_eq!(typewriter.revealed_text(), "");
        assert_eq!(typewriter.target(), "BOOT");
        assert_eq!(typewriter.phase(), Phase::Revealing);
        assert!(!typewriter.is_glitching());
    }

    #[test]
    fn test_empty_target_is_idle_immediately() {
        let mut typewriter = Typewriter::new("", &TIMING);
        assert_eq!(typewriter.phase(), Phase::Idle);
        assert_eq!(typewriter.reveal(0, true), None);
        assert_eq!(typewriter.idle_tick(3000), Some(3100));
    }

    #[test]
    fn test_glitch_clears_after_pulse_duration() {
        let mut typewriter = Typewriter::new("abc", &TIMING);
        let until = typewriter.reveal(1_000, true).unwrap();
        assert_eq!(until, 1_100);
        assert!(typewriter.is_glitching());

        typewriter.settle(1_099);
        assert!(typewriter.is_glitching());
        typewriter.settle(until);
        assert!(!typewriter.is_glitching());
    }

    #[test]
    fn test_overlapping_pulses_extend_the_flag() {
        let mut typewriter = Typewriter::new("abc", &TIMING);
        let first = typewriter.reveal(0, true).unwrap();
        let second = typewriter.reveal(60, true).unwrap();
        assert_eq!((first, second), (100, 160));

        // The first pulse's timer must not cut the second one short.
        typewriter.settle(first);
        assert!(typewriter.is_glitching());
        typewriter.settle(second);
        assert!(!typewriter.is_glitching());
    }

    #[test]
    fn test_last_char_pulse_survives_the_switch_to_idle() {
        let mut typewriter = Typewriter::new("ab", &TIMING);
        typewriter.reveal(0, false);
        let first = typewriter.reveal(100, true).unwrap();
        assert_eq!(typewriter.phase(), Phase::Idle);
        assert!(typewriter.is_glitching());

        // An idle pulse before the first deadline pushes it out.
        let second = typewriter.idle_tick(150).unwrap();
        assert_eq!((first, second), (200, 250));
        typewriter.settle(first);
        assert!(typewriter.is_glitching());

        typewriter.settle(second);
        assert!(!typewriter.is_glitching());
        assert_eq!(typewriter.revealed_text(), "ab");
    }

    #[test]
    fn test_idle_tick_only_pulses_when_idle() {
        let mut typewriter = Typewriter::new("ab", &TIMING);
        assert_eq!(typewriter.idle_tick(0), None);
        run_reveals(&mut typewriter, 2);

        let until = typewriter.idle_tick(3_000).unwrap();
        assert!(typewriter.is_glitching());
        typewriter.settle(until);
        assert!(!typewriter.is_glitching());
        assert_eq!(typewriter.revealed_text(), "ab");
    }

    #[test]
    fn test_roll_respects_extreme_chances() {
        let mut rng = StdRng::seed_from_u64(7);
        let never = TypewriterTiming { glitch_chance: 0.0, ..TIMING };
        let always = TypewriterTiming { glitch_chance: 1.0, ..TIMING };
        for _ in 0..100 {
            assert!(!never.roll_glitch(&mut rng));
            assert!(always.roll_glitch(&mut rng));
        }
    }

    #[test]
    fn test_roll_hits_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let hits = (0..10_000).filter(|_| TIMING.roll_glitch(&mut rng)).count();
        assert!((2_500..3_500).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_noise_is_lowercase_ascii() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = noise(&mut rng, 3);
        assert_eq!(text.len(), 3);
        assert!(text.chars().all(|c| c.is_ascii_lowercase()));
    }
}

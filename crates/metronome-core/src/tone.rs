use crate::constants::{BASE_FREQUENCY_HZ, CENTS_PER_OCTAVE};

/// Audible output for wall collisions.
///
/// Implementations schedule a short square-wave tone and return immediately.
/// They must not fail: a host without audio plays nothing.
pub trait ToneEmitter {
    fn play_note(&self, frequency_hz: f64, duration_sec: f64);
}

/// Emitter used when the host has no audio output.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentTone;

impl ToneEmitter for SilentTone {
    fn play_note(&self, _frequency_hz: f64, _duration_sec: f64) {}
}

impl<T: ToneEmitter> ToneEmitter for Option<T> {
    fn play_note(&self, frequency_hz: f64, duration_sec: f64) {
        if let Some(t) = self {
            t.play_note(frequency_hz, duration_sec);
        }
    }
}

/// Pitch of step `exponent` above the base, each step `cents` wide.
#[inline]
pub fn step_frequency_hz(exponent: f64, cents: f64) -> f64 {
    BASE_FREQUENCY_HZ * 2.0_f64.powf(exponent * cents / CENTS_PER_OCTAVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn step_zero_is_base_frequency() {
        assert_eq!(step_frequency_hz(0.0, 50.0), 110.0);
        assert_eq!(step_frequency_hz(7.0, 0.0), 110.0);
    }

    #[test]
    fn twelve_hundred_cents_is_an_octave() {
        assert!((step_frequency_hz(1.0, 1200.0) - 220.0).abs() < 1e-9);
        assert!((step_frequency_hz(24.0, 50.0) - 220.0).abs() < 1e-9);
        assert!((step_frequency_hz(-12.0, 100.0) - 55.0).abs() < 1e-9);
    }

    struct Counter(RefCell<u32>);
    impl ToneEmitter for Counter {
        fn play_note(&self, _f: f64, _d: f64) {
            *self.0.borrow_mut() += 1;
        }
    }

    #[test]
    fn absent_emitter_is_silent() {
        let none: Option<Counter> = None;
        none.play_note(440.0, 0.1);
        let some = Some(Counter(RefCell::new(0)));
        some.play_note(440.0, 0.1);
        assert_eq!(*some.as_ref().unwrap().0.borrow(), 1);
        SilentTone.play_note(440.0, 0.1);
    }
}

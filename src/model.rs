//! A model that predicts whether the next digit in a sequence of digits
//! will be big or small.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::{InvalidDigit, Outcome, MAX_DIGIT};

/// The number of history digits that form a pattern key.
pub const PATTERN_CTX: usize = 2;

/// The default number of recent digits that the model retains.
pub const DEFAULT_WINDOW: usize = 10;

/// Return a uniformly random prediction with even confidence. Used whenever
/// the table has nothing to say about the current pattern.
fn random_guess<R: Rng>(rng: &mut R) -> (Outcome, f64) {
    let outcome = if rng.gen() {
        Outcome::Big
    } else {
        Outcome::Small
    };
    (outcome, 0.5)
}

/// A simple model that predicts the class of the next digit. CTX defines the
/// number of recent digits that form a pattern key. The model keeps a bounded
/// window of recent digits, and counts for every pattern it has seen how
/// often a big or a small digit followed it.
pub struct PatternModel<const CTX: usize> {
    /// The retained digits, oldest first, capped at 'window' entries.
    history: VecDeque<u8>,
    /// The number of digits that the history may hold.
    window: usize,
    /// Maps each observed pattern to a (big, small) pair counting the
    /// classes of the digits that followed it.
    patterns: HashMap<[u8; CTX], (u32, u32)>,
}

impl<const CTX: usize> Default for PatternModel<CTX> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CTX: usize> PatternModel<CTX> {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Creates a new model that retains the last 'window' digits. A window
    /// shorter than CTX + 1 can never hold a pattern plus the digit that
    /// follows it, so such a model keeps guessing at random.
    pub fn with_window(window: usize) -> Self {
        assert!(CTX >= 1, "A pattern needs at least one context digit");
        assert!(window > 0, "The window must hold at least one digit");
        Self {
            history: VecDeque::with_capacity(window + 1),
            window,
            patterns: HashMap::new(),
        }
    }

    /// Record the observed digit 'digit' and learn from it. Digits above
    /// MAX_DIGIT are rejected and leave the model untouched.
    pub fn update(&mut self, digit: u8) -> Result<(), InvalidDigit> {
        if digit > MAX_DIGIT {
            return Err(InvalidDigit(digit));
        }
        self.history.push_back(digit);
        if self.history.len() > self.window {
            self.history.pop_front();
        }
        // Learn only once the retained window holds a full pattern plus the
        // digit that follows it. The key is read from the window after
        // eviction, so a window shorter than CTX + 1 never learns.
        if self.history.len() > CTX {
            let key = self.pattern_key(self.history.len() - 1);
            let (big, small) = self.patterns.entry(key).or_insert((0, 0));
            match Outcome::from_digit(digit) {
                Outcome::Big => *big += 1,
                Outcome::Small => *small += 1,
            }
        }
        Ok(())
    }

    /// Predict the class of the next digit and the confidence in that call.
    /// Falls back to a coin flip from 'rng' while the history is shorter
    /// than a pattern, when the current pattern was never observed, and when
    /// the counts are tied.
    #[must_use]
    pub fn predict<R: Rng>(&self, rng: &mut R) -> (Outcome, f64) {
        if self.history.len() <= CTX {
            return random_guess(rng);
        }
        let key = self.pattern_key(self.history.len());
        let (big, small) = match self.patterns.get(&key) {
            Some(counts) => *counts,
            None => return random_guess(rng),
        };
        let total = big + small;
        if total == 0 {
            return random_guess(rng);
        }
        if big > small {
            (Outcome::Big, big as f64 / total as f64)
        } else if small > big {
            (Outcome::Small, small as f64 / total as f64)
        } else {
            random_guess(rng)
        }
    }

    /// Return an independent copy of the retained digits, oldest first.
    #[must_use]
    pub fn get_history(&self) -> Vec<u8> {
        self.history.iter().copied().collect()
    }

    /// Forget the history and every pattern count.
    pub fn reset(&mut self) {
        self.history.clear();
        self.patterns.clear();
    }

    /// Extract the CTX digits that precede the history index 'end'.
    fn pattern_key(&self, end: usize) -> [u8; CTX] {
        debug_assert!(end >= CTX && end <= self.history.len());
        let mut key = [0; CTX];
        let slice = self.history.range(end - CTX..end);
        for (slot, digit) in key.iter_mut().zip(slice) {
            *slot = *digit;
        }
        key
    }
}

#[test]
fn test_pattern_model() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut rng = StdRng::seed_from_u64(0);
    let mut model = PatternModel::<PATTERN_CTX>::new();
    // Teach the model that (1, 2) is always followed by a big digit.
    for _ in 0..100 {
        for digit in [1, 2, 7] {
            model.update(digit).unwrap();
        }
    }
    model.update(1).unwrap();
    model.update(2).unwrap();
    assert_eq!(model.predict(&mut rng), (Outcome::Big, 1.0));
    // After one more digit the active pattern is (2, 7), which was always
    // followed by a small digit.
    model.update(7).unwrap();
    assert_eq!(model.predict(&mut rng), (Outcome::Small, 1.0));
}

#[test]
fn test_mixed_counts() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut rng = StdRng::seed_from_u64(1);
    let mut model = PatternModel::<PATTERN_CTX>::new();
    // The pattern (1, 2) is followed by big twice and small once.
    for digit in [1, 2, 7, 1, 2, 8, 1, 2, 3] {
        model.update(digit).unwrap();
    }
    model.update(1).unwrap();
    model.update(2).unwrap();
    let (outcome, confidence) = model.predict(&mut rng);
    assert_eq!(outcome, Outcome::Big);
    assert!((confidence - 2.0 / 3.0).abs() < 1e-9);
}

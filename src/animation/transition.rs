use crate::{
    animation::{ease::Ease, spring::Spring},
    foundation::error::{FolioError, FolioResult},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Tween { duration: f64, ease: Ease },
    Spring(Spring),
}

/// A delayed, one-shot progression from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay: f64, // seconds before the curve starts
    pub curve: Curve,
}

impl Transition {
    pub fn tween(duration: f64, ease: Ease) -> FolioResult<Self> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(FolioError::validation(
                "tween duration must be finite and >= 0",
            ));
        }
        Ok(Self {
            delay: 0.0,
            curve: Curve::Tween { duration, ease },
        })
    }

    pub fn spring(spring: Spring) -> Self {
        Self {
            delay: 0.0,
            curve: Curve::Spring(spring),
        }
    }

    pub fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn duration(&self) -> f64 {
        match self.curve {
            Curve::Tween { duration, .. } => duration,
            Curve::Spring(spring) => spring.settle_duration(),
        }
    }

    /// Elapsed time at which the transition reaches its target.
    pub fn end(&self) -> f64 {
        self.delay + self.duration()
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed + 1e-9 >= self.end()
    }

    /// Curve value at `elapsed` seconds after the transition was triggered.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return 0.0;
        }
        match self.curve {
            Curve::Tween { duration, ease } => {
                if duration <= 0.0 {
                    1.0
                } else {
                    ease.apply(local / duration)
                }
            }
            Curve::Spring(spring) => spring.sample(local),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;

//! Closed-form damped spring from 0 to 1 with zero initial velocity.
//!
//! Springs are resolved once into a natural frequency, a damping ratio and a
//! settle time. Sampling at or past the settle time returns exactly `1.0`, so a
//! spring-driven transition always ends on its target value.

use crate::foundation::error::{FolioError, FolioResult};

/// Residual below which a spring counts as at rest.
pub const REST_DELTA: f64 = 1e-3;

const MAX_SETTLE_SECS: f64 = 10.0;
const SETTLE_SEARCH_STEP: f64 = 1e-3;

// Solves (1 + u) * e^-u = REST_DELTA.
const CRITICAL_SETTLE_FACTOR: f64 = 9.233;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    omega: f64,
    zeta: f64,
    settle: f64,
}

impl Spring {
    /// Duration-based spring. `bounce = 0` is critically damped and never
    /// overshoots; higher bounce lowers the damping ratio to `1 - bounce`.
    pub fn from_duration(duration: f64, bounce: f64) -> FolioResult<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(FolioError::validation(
                "spring duration must be finite and > 0",
            ));
        }
        if !bounce.is_finite() || !(0.0..1.0).contains(&bounce) {
            return Err(FolioError::validation("spring bounce must be in [0, 1)"));
        }

        let zeta = 1.0 - bounce;
        let omega = if is_critical(zeta) {
            CRITICAL_SETTLE_FACTOR / duration
        } else {
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            (amplitude / REST_DELTA).ln() / (zeta * duration)
        };

        Ok(Self {
            omega,
            zeta,
            settle: duration,
        })
    }

    /// Physical spring (`stiffness`, `damping`, `mass`).
    pub fn from_physics(stiffness: f64, damping: f64, mass: f64) -> FolioResult<Self> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(FolioError::validation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !damping.is_finite() || damping <= 0.0 {
            return Err(FolioError::validation(
                "spring damping must be finite and > 0",
            ));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(FolioError::validation("spring mass must be finite and > 0"));
        }

        let omega = (stiffness / mass).sqrt();
        let zeta = damping / (2.0 * (stiffness * mass).sqrt());
        let mut spring = Self {
            omega,
            zeta,
            settle: MAX_SETTLE_SECS,
        };
        spring.settle = spring.find_settle_time();
        Ok(spring)
    }

    pub fn damping_ratio(&self) -> f64 {
        self.zeta
    }

    pub fn settle_duration(&self) -> f64 {
        self.settle
    }

    pub fn sample(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= self.settle {
            return 1.0;
        }
        self.position(t)
    }

    fn position(&self, t: f64) -> f64 {
        let (w, z) = (self.omega, self.zeta);
        if is_critical(z) {
            1.0 - (1.0 + w * t) * (-w * t).exp()
        } else if z < 1.0 {
            let wd = w * (1.0 - z * z).sqrt();
            let decay = (-z * w * t).exp();
            1.0 - decay * ((wd * t).cos() + (z * w / wd) * (wd * t).sin())
        } else {
            let root = (z * z - 1.0).sqrt();
            let r1 = -w * (z - root);
            let r2 = -w * (z + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    // Upper bound on |1 - x(t)|.
    fn envelope(&self, t: f64) -> f64 {
        let (w, z) = (self.omega, self.zeta);
        if is_critical(z) {
            (1.0 + w * t) * (-w * t).exp()
        } else if z < 1.0 {
            (-z * w * t).exp() / (1.0 - z * z).sqrt()
        } else {
            (1.0 - self.position(t)).abs()
        }
    }

    fn find_settle_time(&self) -> f64 {
        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if self.envelope(t) < REST_DELTA {
                return t;
            }
            t += SETTLE_SEARCH_STEP;
        }
        MAX_SETTLE_SECS
    }
}

fn is_critical(zeta: f64) -> bool {
    (zeta - 1.0).abs() < 1e-9
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

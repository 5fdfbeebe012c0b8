//! Combat resolution
//!
//! Every contested outcome in a game (objectives, skirmishes, pushes) is a
//! two-sided fight decided here. The win probability depends on the average
//! power of the living players on each side, with a small tilt that
//! amplifies the gap.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Aggregate strength of one side at a moment in the game.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SidePower {
    pub total: f32,
    pub alive: usize,
}

impl SidePower {
    pub fn new(total: f32, alive: usize) -> Self {
        Self { total, alive }
    }

    /// Mean power per living player, 0 when the side is wiped.
    #[inline]
    pub fn average(&self) -> f32 {
        if self.alive == 0 || !self.total.is_finite() {
            0.0
        } else {
            (self.total / self.alive as f32).max(0.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatOutcome {
    /// Probability that side A wins.
    pub p_a: f32,
    pub a_wins: bool,
}

impl CombatOutcome {
    /// Win probability of the side that actually won.
    pub fn winner_probability(&self) -> f32 {
        if self.a_wins {
            self.p_a
        } else {
            1.0 - self.p_a
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatResolver {
    tilt: f32,
}

impl CombatResolver {
    pub fn new(tilt: f32) -> Self {
        Self { tilt }
    }

    /// P(A wins). Always within `[0, 1]`; two empty sides give 0.5.
    pub fn win_probability(&self, a: SidePower, b: SidePower) -> f32 {
        let avg_a = a.average();
        let avg_b = b.average();
        let sum = avg_a + avg_b;
        if sum <= f32::EPSILON {
            return 0.5;
        }
        let p = avg_a / sum + self.tilt * (avg_a - avg_b) / sum;
        p.clamp(0.0, 1.0)
    }

    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R, a: SidePower, b: SidePower) -> CombatOutcome {
        let p_a = self.win_probability(a, b);
        CombatOutcome { p_a, a_wins: rng.gen::<f32>() < p_a }
    }
}

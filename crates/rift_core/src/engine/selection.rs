//! Weighted random selection
//!
//! Every stochastic choice in the draft and the tick engine goes through
//! these helpers so that they stay total: an empty or all-zero weight list
//! yields `None` instead of panicking.

use rand::Rng;

/// Draw an index proportionally to `weights`.
///
/// Non-positive and non-finite weights are never chosen.
pub fn weighted_index<R: Rng + ?Sized>(rng: &mut R, weights: &[f32]) -> Option<usize> {
    let total: f32 = weights.iter().copied().filter(|w| usable(*w)).sum();
    if total <= 0.0 {
        return None;
    }

    let mut roll = rng.gen::<f32>() * total;
    let mut last = None;
    for (i, &weight) in weights.iter().enumerate() {
        if !usable(weight) {
            continue;
        }
        last = Some(i);
        roll -= weight;
        if roll <= 0.0 {
            return Some(i);
        }
    }
    // float drift: fall back to the last usable slot
    last
}

/// Draw one item with a weight function.
pub fn weighted_pick<'a, T, R, F>(rng: &mut R, items: &'a [T], weight: F) -> Option<&'a T>
where
    R: Rng + ?Sized,
    F: Fn(&T) -> f32,
{
    let weights: Vec<f32> = items.iter().map(weight).collect();
    weighted_index(rng, &weights).map(|i| &items[i])
}

/// Bernoulli trial. `p` outside 0..=1 is clamped.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f32) -> bool {
    if !p.is_finite() {
        return false;
    }
    rng.gen::<f32>() < p.clamp(0.0, 1.0)
}

#[inline]
fn usable(weight: f32) -> bool {
    weight.is_finite() && weight > 0.0
}

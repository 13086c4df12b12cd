//! Dodge rolls.

use rand::Rng;

/// Samples whether an attack is dodged.
///
/// `probability` is clamped to `[0, 1]`; non-finite values never dodge.
pub fn roll_dodge(probability: f64, rng: &mut impl Rng) -> bool {
    if !probability.is_finite() {
        return false;
    }
    rng.gen_bool(probability.clamp(0.0, 1.0))
}

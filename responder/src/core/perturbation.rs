use rand::Rng;

use crate::data::position::Position;

/// Offsets `epicenter` by independent uniform noise in [-max_offset, max_offset]
/// on each axis, then clamps back into the unit square.
pub fn perturb_position<R: Rng + ?Sized>(epicenter: &Position, max_offset: f64, rng: &mut R) -> Position {
    if max_offset <= 0.0 {
        return *epicenter;
    }
    let dx = rng.gen_range(-max_offset..=max_offset);
    let dy = rng.gen_range(-max_offset..=max_offset);
    Position::new(epicenter.x + dx, epicenter.y + dy)
}

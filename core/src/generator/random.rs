use alloc::vec::Vec;
use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;
use crate::request::Constraints;

/// Generation strategy that honors forced mines and exclusions, and is otherwise uniformly random over the remaining
/// cells.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomFieldGenerator<R = SmallRng> {
    rng: R,
}

impl RandomFieldGenerator<SmallRng> {
    /// Reproducible generator, the same seed always yields the same sequence of fields.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomFieldGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_rng(self) -> R {
        self.rng
    }
}

impl<R: Rng> FieldGenerator for RandomFieldGenerator<R> {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Field> {
        generate_field(request, &mut self.rng)
    }
}

/// Generates a field for `request`, drawing all randomness from `rng`.
pub fn generate_field<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> Result<Field> {
    let constraints = request.resolve()?;
    let mut mines: Array2<bool> = Array2::default(request.size().to_nd_index());

    for &coords in &constraints.forced_mines {
        mines[coords.to_nd_index()] = true;
    }

    let forced_count = constraints.forced_mines.len() as CellCount;
    if forced_count > request.mine_count {
        log::warn!(
            "Forced mines exceed requested count, keeping all {} but requested {}",
            forced_count,
            request.mine_count
        );
    }
    let remaining = request.mine_count.saturating_sub(forced_count) as usize;

    let mut candidates = candidate_positions(request.size(), &constraints);
    // `resolve` keeps `remaining` within the pool, `take` clamps regardless
    if remaining > candidates.len() {
        log::warn!(
            "Not enough free cells, requested {} more mines but only {} fit",
            remaining,
            candidates.len()
        );
    }
    shuffle_positions(&mut candidates, rng);

    for &coords in candidates.iter().take(remaining) {
        mines[coords.to_nd_index()] = true;
    }

    let field = Field::from_mine_mask(&mines)?;
    log::debug!(
        "Generated {}x{} field with {} mines ({} forced, {} excluded)",
        request.rows,
        request.cols,
        field.mine_count(),
        forced_count,
        constraints.excluded.len()
    );
    Ok(field)
}

/// Fisher-Yates shuffle: walks from the last index down to 1, swapping with a uniform pick from `0..=i`.
pub fn shuffle_positions<R: Rng + ?Sized>(positions: &mut [Position], rng: &mut R) {
    for i in (1..positions.len()).rev() {
        let j = rng.random_range(0..=i);
        positions.swap(i, j);
    }
}

/// Every cell that is neither forced nor excluded, in row-major order.
fn candidate_positions((rows, cols): Position, constraints: &Constraints) -> Vec<Position> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&coords| constraints.is_free(coords))
        .collect()
}

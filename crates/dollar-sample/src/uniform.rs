use dollar_core::codes;
use dollar_core::errors::{sample_error, DollarError};
use dollar_core::rng::RngHandle;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combinatorics::{decode, decoded_sum, Patterns, MAX_SLOTS};

/// Parameters of a sampling call: `count` integers in `[floor, ceiling]`
/// summing to `sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    /// Number of integers to produce. Must be positive.
    pub count: usize,
    /// Exact total the integers must add up to.
    pub sum: i64,
    /// Smallest permitted value.
    pub floor: i32,
    /// Largest permitted value.
    pub ceiling: i32,
}

/// Stars-and-bars dimensions of a validated [`SampleRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Number of values to pick.
    pub count: u32,
    /// Size of the value alphabet, `ceiling - floor + 1`.
    pub flavors: u32,
    /// Encoding length, `count + flavors - 1`.
    pub slots: u32,
}

impl Layout {
    /// Number of combinations before filtering by sum, `C(slots, count)`.
    pub fn combinations(&self) -> u64 {
        crate::combinatorics::binomial(u64::from(self.slots), u64::from(self.count))
    }
}

impl SampleRequest {
    /// Creates a request.
    pub const fn new(count: usize, sum: i64, floor: i32, ceiling: i32) -> Self {
        Self {
            count,
            sum,
            floor,
            ceiling,
        }
    }

    /// Checks the basic preconditions shared by every sampler.
    pub(crate) fn check_bounds(&self) -> Result<(), DollarError> {
        if self.count == 0 {
            return Err(sample_error(
                codes::INVALID_REQUEST,
                "at least one integer must be requested",
            ));
        }
        if self.floor > self.ceiling {
            return Err(
                sample_error(codes::INVALID_REQUEST, "floor must not exceed ceiling")
                    .with_context("floor", self.floor)
                    .with_context("ceiling", self.ceiling),
            );
        }
        Ok(())
    }

    /// Returns whether `sum` lies within `[count * floor, count * ceiling]`.
    pub fn is_feasible(&self) -> bool {
        let count = self.count as i128;
        let sum = i128::from(self.sum);
        sum >= count * i128::from(self.floor) && sum <= count * i128::from(self.ceiling)
    }

    /// Validates the request against the exact sampler's 32-slot encoding.
    pub fn validate(&self) -> Result<Layout, DollarError> {
        self.check_bounds()?;
        let flavors = i64::from(self.ceiling) - i64::from(self.floor) + 1;
        let slots = self.count as u128 + flavors as u128 - 1;
        if slots > u128::from(MAX_SLOTS) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                count = self.count,
                flavors,
                slots = slots as u64,
                "sample request exceeds encoding capacity"
            );
            return Err(sample_error(
                codes::CAPACITY_EXCEEDED,
                "request needs more than 32 encoding slots",
            )
            .with_context("count", self.count)
            .with_context("flavors", flavors)
            .with_context("slots", slots)
            .with_hint("use fewer integers or a narrower range"));
        }
        Ok(Layout {
            count: self.count as u32,
            flavors: flavors as u32,
            slots: slots as u32,
        })
    }

    fn no_solution(&self) -> DollarError {
        sample_error(codes::NO_SOLUTION, "no integer sequence satisfies the request")
            .with_context("count", self.count)
            .with_context("sum", self.sum)
            .with_context("floor", self.floor)
            .with_context("ceiling", self.ceiling)
    }
}

/// First pass: counts the combinations whose values add up to `sum`.
pub fn solution_count(request: &SampleRequest) -> Result<u64, DollarError> {
    let layout = request.validate()?;
    if !request.is_feasible() {
        return Ok(0);
    }
    let matches = Patterns::new(layout.count, layout.slots)
        .filter(|pattern| decoded_sum(*pattern, request.count, request.floor) == request.sum)
        .count() as u64;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        combinations = layout.combinations(),
        matches,
        "enumerated sample space"
    );
    Ok(matches)
}

/// Second pass: the `n`-th matching combination in enumeration order, in
/// non-decreasing order. `None` when fewer than `n + 1` combinations match.
pub fn nth_solution(request: &SampleRequest, n: u64) -> Result<Option<Vec<i32>>, DollarError> {
    let layout = request.validate()?;
    if !request.is_feasible() {
        return Ok(None);
    }
    let found = Patterns::new(layout.count, layout.slots)
        .filter(|pattern| decoded_sum(*pattern, request.count, request.floor) == request.sum)
        .nth(usize::try_from(n).unwrap_or(usize::MAX))
        .map(|pattern| decode(pattern, request.count, request.floor));
    Ok(found)
}

/// Picks one combination uniformly among those that satisfy the request and
/// returns it in non-decreasing order.
///
/// Fails with `invalid-request`, `capacity-exceeded` or `no-solution`; never
/// returns a partial sequence.
pub fn select(request: &SampleRequest, rng: &mut RngHandle) -> Result<Vec<i32>, DollarError> {
    let matches = solution_count(request)?;
    if matches == 0 {
        return Err(request.no_solution());
    }
    let target = rng.gen_range(0..matches);
    match nth_solution(request, target)? {
        Some(values) => Ok(values),
        None => {
            #[cfg(feature = "tracing")]
            tracing::error!(target, matches, "second pass lost a counted combination");
            Err(request
                .no_solution()
                .with_context("target", target)
                .with_context("matches", matches))
        }
    }
}

/// Uniformly samples `count` integers in `[floor, ceiling]` summing to `sum`.
///
/// The combination is chosen by [`select`] and then shuffled, so repeated
/// calls vary in order as well as content.
pub fn sample(request: &SampleRequest, rng: &mut RngHandle) -> Result<Vec<i32>, DollarError> {
    let mut values = select(request, rng)?;
    values.shuffle(rng);
    Ok(values)
}

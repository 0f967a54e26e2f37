//! Recursive halving sampler for requests the exact sampler cannot encode.
//!
//! The sequence is split into two halves and the first half's total is drawn
//! uniformly from the range both halves can still reach. The result always
//! satisfies the request, but the distribution over sequences is not uniform.

use dollar_core::codes;
use dollar_core::errors::{sample_error, DollarError};
use dollar_core::rng::RngHandle;
use rand::Rng;

use crate::uniform::SampleRequest;

/// Samples `count` integers in `[floor, ceiling]` summing to `sum` by
/// recursive halving. No slot limit applies.
pub fn split_sample(request: &SampleRequest, rng: &mut RngHandle) -> Result<Vec<i32>, DollarError> {
    request.check_bounds()?;
    if !request.is_feasible() {
        return Err(sample_error(
            codes::NO_SOLUTION,
            "sum lies outside the reachable range",
        )
        .with_context("count", request.count)
        .with_context("sum", request.sum)
        .with_context("floor", request.floor)
        .with_context("ceiling", request.ceiling));
    }
    let mut values = Vec::with_capacity(request.count);
    fill(
        &mut values,
        request.count,
        i128::from(request.sum),
        i128::from(request.floor),
        i128::from(request.ceiling),
        rng,
    );
    Ok(values)
}

// Callers guarantee count * floor <= sum <= count * ceiling.
fn fill(out: &mut Vec<i32>, count: usize, sum: i128, floor: i128, ceiling: i128, rng: &mut RngHandle) {
    if count == 1 {
        out.push(sum as i32);
        return;
    }
    let second = count / 2;
    let first = count - second;
    let (first_n, second_n) = (first as i128, second as i128);
    let lo = (floor * first_n).max(sum - ceiling * second_n);
    let hi = (ceiling * first_n).min(sum - floor * second_n);
    let first_sum = rng.gen_range(lo..=hi);
    fill(out, first, first_sum, floor, ceiling, rng);
    fill(out, second, sum - first_sum, floor, ceiling, rng);
}

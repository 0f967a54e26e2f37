use dollar_core::codes;
use dollar_core::errors::DollarError;
use dollar_core::rng::RngHandle;
use serde::{Deserialize, Serialize};

use crate::split::split_sample;
use crate::uniform::{sample, SampleRequest};

/// Selects which sampler serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingStrategy {
    /// Exact uniform sampler only; large requests fail with `capacity-exceeded`.
    Uniform,
    /// Recursive halving only.
    Split,
    /// Exact uniform sampler, falling back to halving when the request does
    /// not fit the encoding.
    #[default]
    UniformThenSplit,
}

/// Samples `request` with the given strategy.
pub fn sample_with(
    strategy: SamplingStrategy,
    request: &SampleRequest,
    rng: &mut RngHandle,
) -> Result<Vec<i32>, DollarError> {
    match strategy {
        SamplingStrategy::Uniform => sample(request, rng),
        SamplingStrategy::Split => split_sample(request, rng),
        SamplingStrategy::UniformThenSplit => match sample(request, rng) {
            Err(err) if err.is(codes::CAPACITY_EXCEEDED) => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    count = request.count,
                    floor = request.floor,
                    ceiling = request.ceiling,
                    "falling back to split sampler"
                );
                split_sample(request, rng)
            }
            other => other,
        },
    }
}

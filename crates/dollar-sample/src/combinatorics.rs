//! Stars-and-bars primitives for enumerating fixed-size multisets.
//!
//! A multiset of `count` values drawn from `flavors` consecutive integers is
//! encoded as a bit pattern of `count + flavors - 1` slots with exactly
//! `count` bits set. Reading from the least significant bit, a set bit emits
//! the current value and a clear bit moves on to the next value.

/// Largest encoding length supported by the sampler.
pub const MAX_SLOTS: u32 = 32;

/// Exact binomial coefficient `C(n, k)`, saturating at `u64::MAX`.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) at every step
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}

/// Number of multisets of size `count` over `flavors` values.
pub fn multiset_count(count: u64, flavors: u64) -> u64 {
    if flavors == 0 {
        return u64::from(count == 0);
    }
    binomial(count + flavors - 1, count)
}

/// Smallest pattern with `bits` set bits.
pub fn first_pattern(bits: u32) -> u64 {
    match bits {
        0 => 0,
        64..=u32::MAX => u64::MAX,
        _ => (1u64 << bits) - 1,
    }
}

/// Next larger integer with the same number of set bits ("snoob").
///
/// Returns `0` for `0`, which has no successor.
pub fn next_snoob(x: u64) -> u64 {
    if x == 0 {
        return 0;
    }
    let rightmost = x & x.wrapping_neg();
    let ripple = x.wrapping_add(rightmost);
    let ones = ((x ^ ripple) / rightmost) >> 2;
    ripple | ones
}

/// Enumerates every `count`-of-`slots` pattern in increasing numeric order.
#[derive(Debug, Clone)]
pub struct Patterns {
    current: u64,
    remaining: u64,
}

impl Patterns {
    /// Creates the enumeration of patterns with `count` bits set among the
    /// low `slots` bits.
    pub fn new(count: u32, slots: u32) -> Self {
        Self {
            current: first_pattern(count),
            remaining: binomial(u64::from(slots), u64::from(count)),
        }
    }
}

impl Iterator for Patterns {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let pattern = self.current;
        self.current = next_snoob(pattern);
        self.remaining -= 1;
        Some(pattern)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Decodes `pattern` into the `count` values it selects, starting at `floor`.
///
/// The values come out in non-decreasing order.
pub fn decode(pattern: u64, count: usize, floor: i32) -> Vec<i32> {
    let mut values = Vec::with_capacity(count);
    walk(pattern, count, floor, |value| values.push(value));
    values
}

/// Sum of the values `pattern` selects, without materialising them.
pub fn decoded_sum(pattern: u64, count: usize, floor: i32) -> i64 {
    let mut sum = 0i64;
    walk(pattern, count, floor, |value| sum += i64::from(value));
    sum
}

fn walk(pattern: u64, count: usize, floor: i32, mut emit: impl FnMut(i32)) {
    let mut emitted = 0usize;
    let mut flavor = 0i32;
    let mut bit = 0u32;
    while emitted < count && bit < u64::BITS {
        if (pattern >> bit) & 1 == 1 {
            emit(floor + flavor);
            emitted += 1;
        } else {
            flavor += 1;
        }
        bit += 1;
    }
}

use dollar_core::rng::{derive_substream_seed, RngHandle};
use rand::RngCore;

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(1234);
    let mut rng_b = RngHandle::from_seed(1234);

    let seq_a: Vec<u64> = (0..100).map(|_| rng_a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| rng_b.next_u64()).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn substreams_are_stable_and_distinct() {
    assert_eq!(derive_substream_seed(7, 1), derive_substream_seed(7, 1));
    assert_ne!(derive_substream_seed(7, 1), derive_substream_seed(7, 2));

    let mut first = RngHandle::substream(7, 1);
    let mut again = RngHandle::from_seed(derive_substream_seed(7, 1));
    let mut other = RngHandle::substream(7, 2);
    let a = first.next_u64();
    assert_eq!(a, again.next_u64());
    assert_ne!(a, other.next_u64());
}

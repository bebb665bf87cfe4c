use rand::Rng;

use flipside::rng_for_stream;

fn draw(seed: u64, stream: u64, n: usize) -> Vec<u64> {
    let mut rng = rng_for_stream(seed, stream);
    (0..n).map(|_| rng.gen()).collect()
}

#[test]
fn same_seed_and_stream_reproduce_the_sequence() {
    assert_eq!(draw(0, 0, 16), draw(0, 0, 16));
    assert_eq!(draw(1234, 7, 16), draw(1234, 7, 16));
}

#[test]
fn different_seeds_diverge() {
    assert_ne!(draw(1, 0, 16), draw(2, 0, 16));
}

#[test]
fn different_streams_diverge() {
    assert_ne!(draw(99, 0, 16), draw(99, 1, 16));
}

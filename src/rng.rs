use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, stream) pair.
///
/// Implementation detail:
/// - Derives a 64-bit seed as `seed ^ rotl(stream, 17)` so nearby streams
///   (game ids, agent slots) do not collapse onto the same sequence.
/// - Uses PCG 64-bit (rand_pcg::Pcg64) for reproducible sequences.
/// - Identical inputs always reproduce the identical sequence.
#[inline]
pub fn rng_for_stream(seed: u64, stream: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed ^ stream.rotate_left(17))
}

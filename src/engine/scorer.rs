use crate::engine::seed;

pub const SCORE_FLOOR: u8 = 25;
pub const SCORE_SPAN: u32 = 55;

/// Deterministic base risk score in [25, 79].
///
/// Reduces the wallet digest, read as a big-endian integer, modulo 55
/// and offsets by 25. The digest is recomputed here rather than drawn
/// from the exposure generator's stream, so reordering the two
/// derivations can never perturb either output.
pub fn score(wallet: &str) -> u8 {
    let digest = seed::wallet_digest(wallet);
    let mut acc: u32 = 0;
    for byte in digest {
        acc = (acc * 256 + u32::from(byte)) % SCORE_SPAN;
    }
    SCORE_FLOOR + acc as u8
}

use crate::*;
use rand::{CryptoRng, RngCore};

/// Authority-side signing of a raw ballot.
///
/// `raw_ballot` is the base64-decoded ballot from a validated request. It is
/// treated as opaque bytes: when blinded, the authority certifies it without
/// learning the vote. For RSA this is a PKCS#1 v1.5 signature over the SHA-512
/// digest of the ballot.
pub fn sign_ballot<K, R>(key: &K, rng: &mut R, raw_ballot: &[u8]) -> Result<K::Signature, SigningError>
where
    K: PrivateKey,
    R: RngCore + CryptoRng,
{
    tracing::debug!(ballot_len = raw_ballot.len(), "signing ballot");

    key.sign_message(rng, raw_ballot).map_err(|e| {
        tracing::warn!(error = %e, "ballot signing failed");
        e
    })
}

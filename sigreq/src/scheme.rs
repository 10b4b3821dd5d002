use crate::*;
use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use std::fmt::Debug;

/// A voter or authority public key.
///
/// Implemented once per signature scheme. The canonical string is the exact
/// text embedded in requests and signing transcripts.
pub trait PublicKey: Clone + Debug + PartialEq + Sized {
    /// Parse a key from its textual form
    fn parse(bytes: &[u8]) -> Result<Self, ParseError>;

    fn canonical_string(&self) -> String;

    /// Hex encoded SHA-512 of the canonical string, as ASCII bytes.
    ///
    /// This is the request id a voter must present alongside this key.
    fn sha512(&self) -> Vec<u8> {
        sha512_hex(self.canonical_string().as_bytes()).into_bytes()
    }
}

/// A signature bound to a scheme's public key type.
pub trait Signature: Clone + Debug + PartialEq + Sized {
    type PublicKey: PublicKey;

    /// Parse a signature from its textual form
    fn parse(bytes: &[u8]) -> Result<Self, ParseError>;

    fn canonical_string(&self) -> String;

    /// Check that this signature was produced over `message` by the holder of
    /// `public_key`'s private half.
    fn verify(&self, public_key: &Self::PublicKey, message: &[u8])
        -> Result<(), VerificationError>;
}

/// A private signing key.
///
/// The random source is passed on every call; callers sharing one source
/// across threads must serialize access to it.
pub trait PrivateKey {
    type Signature: Signature;

    fn public_key(&self) -> <Self::Signature as Signature>::PublicKey;

    fn sign_message<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<Self::Signature, SigningError>;
}

/// Lowercase hex SHA-512 of `data`
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(Sha512::digest(data))
}

use crate::*;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ed25519_dalek::Signature as EdSignature;
use ed25519_dalek::SigningKey;
use ed25519_dalek::VerifyingKey;
use ed25519_dalek::{PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use rand::{CryptoRng, RngCore};
use std::convert::TryInto;

impl PublicKey for VerifyingKey {
    fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let raw = BASE64.decode(bytes)?;
        let raw: [u8; PUBLIC_KEY_LENGTH] =
            raw.as_slice()
                .try_into()
                .map_err(|_| ParseError::WrongLength {
                    expected: PUBLIC_KEY_LENGTH,
                    found: raw.len(),
                })?;
        Ok(VerifyingKey::from_bytes(&raw)?)
    }

    fn canonical_string(&self) -> String {
        BASE64.encode(self.as_bytes())
    }
}

impl Signature for EdSignature {
    type PublicKey = VerifyingKey;

    fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let raw = BASE64.decode(bytes)?;
        if raw.len() != SIGNATURE_LENGTH {
            return Err(ParseError::WrongLength {
                expected: SIGNATURE_LENGTH,
                found: raw.len(),
            });
        }
        Ok(EdSignature::from_slice(&raw)?)
    }

    fn canonical_string(&self) -> String {
        BASE64.encode(self.to_bytes())
    }

    fn verify(&self, public_key: &VerifyingKey, message: &[u8]) -> Result<(), VerificationError> {
        public_key.verify_strict(message, self)?;
        Ok(())
    }
}

// Ed25519 is deterministic, the random source goes unused.
impl PrivateKey for SigningKey {
    type Signature = EdSignature;

    fn public_key(&self) -> VerifyingKey {
        self.verifying_key()
    }

    fn sign_message<R: RngCore + CryptoRng>(
        &self,
        _rng: &mut R,
        message: &[u8],
    ) -> Result<EdSignature, SigningError> {
        Ok(ed25519_dalek::Signer::sign(self, message))
    }
}

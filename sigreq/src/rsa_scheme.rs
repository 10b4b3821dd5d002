use crate::*;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{CryptoRng, RngCore};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};

const PEM_PREFIX: &[u8] = b"-----BEGIN";

// Canonical form: base64 of the SubjectPublicKeyInfo DER, no line breaks.
// PEM input is accepted and normalised to the canonical form.
impl PublicKey for RsaPublicKey {
    fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::Empty);
        }
        if bytes.starts_with(PEM_PREFIX) {
            let pem = std::str::from_utf8(bytes)?;
            return Ok(RsaPublicKey::from_public_key_pem(pem)?);
        }

        let der = BASE64.decode(bytes)?;
        Ok(RsaPublicKey::from_public_key_der(&der)?)
    }

    fn canonical_string(&self) -> String {
        let der = self
            .to_public_key_der()
            .expect("sigreq: Unexpected error encoding RSA public key");
        BASE64.encode(der.as_bytes())
    }
}

/// A PKCS#1 v1.5 RSA signature over a SHA-512 digest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaSignature(Vec<u8>);

impl RsaSignature {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        RsaSignature(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Signature for RsaSignature {
    type PublicKey = RsaPublicKey;

    fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        let raw = BASE64.decode(bytes)?;
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(RsaSignature(raw))
    }

    fn canonical_string(&self) -> String {
        BASE64.encode(&self.0)
    }

    fn verify(&self, public_key: &RsaPublicKey, message: &[u8]) -> Result<(), VerificationError> {
        let digest = Sha512::digest(message);
        public_key.verify(Pkcs1v15Sign::new::<Sha512>(), &digest, &self.0)?;
        Ok(())
    }
}

impl PrivateKey for RsaPrivateKey {
    type Signature = RsaSignature;

    fn public_key(&self) -> RsaPublicKey {
        self.to_public_key()
    }

    fn sign_message<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        message: &[u8],
    ) -> Result<RsaSignature, SigningError> {
        let digest = Sha512::digest(message);
        let raw = self.sign_with_rng(rng, Pkcs1v15Sign::new::<Sha512>(), &digest)?;
        Ok(RsaSignature(raw))
    }
}

use crate::*;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::{CryptoRng, RngCore};
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A voter's request for the authority to sign a (possibly blinded) ballot.
///
/// Wire form, fields separated by a blank line:
///
/// ```text
/// election id
///
/// request id (hex SHA-512 of the public key's canonical form)
///
/// public key
///
/// ballot (base64)
///
/// signature over the four fields above
/// ```
///
/// A request obtained from `from_bytes`, `FromStr` or serde has passed full
/// validation. Fields are read-only once constructed.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureRequest<S: Signature = RsaSignature> {
    election_id: String,
    request_id: String,
    public_key: S::PublicKey,
    ballot: String,
    signature: S,
}

pub type RsaSignatureRequest = SignatureRequest<RsaSignature>;

impl<S: Signature> SignatureRequest<S> {
    /// Decode and fully validate a raw signature request
    pub fn from_bytes(raw: &[u8]) -> Result<Self, Error> {
        decode_request(raw)
    }

    /// Assemble a request without any validation.
    ///
    /// For callers that already trust every field, such as the authority after
    /// its own checks.
    pub fn from_trusted_parts(
        election_id: String,
        request_id: String,
        public_key: S::PublicKey,
        ballot: String,
        signature: S,
    ) -> Self {
        SignatureRequest {
            election_id,
            request_id,
            public_key,
            ballot,
            signature,
        }
    }

    /// Create and sign a new request on behalf of a voter.
    ///
    /// `raw_ballot` is base64 encoded into the request as-is; blind it first if
    /// the authority must not learn it.
    pub fn new_signed<K, R>(
        election_id: &str,
        raw_ballot: &[u8],
        voter_key: &K,
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        K: PrivateKey<Signature = S>,
        R: RngCore + CryptoRng,
    {
        if election_id.is_empty() {
            return Err(FormatError::EmptyElectionId.into());
        }
        if election_id.contains(DELIMITER) {
            return Err(FormatError::DelimiterInField("election id").into());
        }

        let public_key = voter_key.public_key();
        let request_id = sha512_hex(public_key.canonical_string().as_bytes());
        let ballot = BASE64.encode(raw_ballot);

        let message = transcript(
            election_id,
            &request_id,
            &public_key.canonical_string(),
            &ballot,
        );
        let signature = voter_key.sign_message(rng, &message)?;

        Ok(SignatureRequest {
            election_id: election_id.to_owned(),
            request_id,
            public_key,
            ballot,
            signature,
        })
    }

    pub fn election_id(&self) -> &str {
        &self.election_id
    }

    /// Hex encoded SHA-512 of the voter's public key
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn public_key(&self) -> &S::PublicKey {
        &self.public_key
    }

    /// The ballot as base64 text
    pub fn ballot(&self) -> &str {
        &self.ballot
    }

    pub fn signature(&self) -> &S {
        &self.signature
    }

    /// The bytes the voter's signature covers
    pub fn transcript(&self) -> Vec<u8> {
        transcript(
            &self.election_id,
            &self.request_id,
            &self.public_key.canonical_string(),
            &self.ballot,
        )
    }

    /// Verify the voter's signature on this request
    pub fn verify_signature(&self) -> Result<(), Error> {
        verify_request(self)
    }

    /// The raw (possibly blinded) ballot bytes
    pub fn decode_ballot(&self) -> Result<Vec<u8>, Error> {
        Ok(decode_ballot_text(&self.ballot)?)
    }

    /// Sign this request's ballot with the authority's key.
    ///
    /// The authority's decision to sign is made by the caller; this only
    /// produces the signature.
    pub fn sign_ballot<K, R>(&self, authority_key: &K, rng: &mut R) -> Result<K::Signature, Error>
    where
        K: PrivateKey,
        R: RngCore + CryptoRng,
    {
        let raw = self.decode_ballot()?;
        Ok(sign_ballot(authority_key, rng, &raw)?)
    }

    /// Canonical wire encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

impl<S: Signature> fmt::Display for SignatureRequest<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let public_key = self.public_key.canonical_string();
        let signature = self.signature.canonical_string();
        f.write_str(&join_fields(&[
            self.election_id.as_str(),
            self.request_id.as_str(),
            public_key.as_str(),
            self.ballot.as_str(),
            signature.as_str(),
        ]))
    }
}

impl<S: Signature> FromStr for SignatureRequest<S> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl<S: Signature> Serialize for SignatureRequest<S> {
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: Serializer,
    {
        let mut state = serializer.serialize_struct("SignatureRequest", FIELD_COUNT)?;
        state.serialize_field("election_id", &self.election_id)?;
        state.serialize_field("request_id", &self.request_id)?;
        state.serialize_field("public_key", &self.public_key.canonical_string())?;
        state.serialize_field("ballot", &self.ballot)?;
        state.serialize_field("signature", &self.signature.canonical_string())?;
        state.end()
    }
}

#[derive(Deserialize)]
struct RawSignatureRequest {
    election_id: String,
    request_id: String,
    public_key: String,
    ballot: String,
    signature: String,
}

impl<'de, S: Signature> Deserialize<'de> for SignatureRequest<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSignatureRequest::deserialize(deserializer)?;
        validate_fields([
            raw.election_id.as_str(),
            raw.request_id.as_str(),
            raw.public_key.as_str(),
            raw.ballot.as_str(),
            raw.signature.as_str(),
        ])
        .map_err(de::Error::custom)
    }
}

use crate::*;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

// Standard alphabet with required padding, but non-zero trailing bits in the
// final quantum are accepted.
const BALLOT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Decode ballot text to raw ballot bytes.
///
/// Line breaks (`\r`, `\n`) are skipped, so line-wrapped ballots decode.
pub fn decode_ballot_text(ballot: &str) -> Result<Vec<u8>, base64::DecodeError> {
    const LINE_BREAKS: &[char] = &['\r', '\n'];

    if ballot.contains(LINE_BREAKS) {
        BALLOT_ENGINE.decode(ballot.replace(LINE_BREAKS, ""))
    } else {
        BALLOT_ENGINE.decode(ballot)
    }
}

/// Validate the five wire fields of a request and assemble it.
///
/// Checks run cheapest first and stop at the first failure:
///
/// 1. the public key parses
/// 2. the request id equals the hex SHA-512 of the key's canonical form
/// 3. the ballot is base64
/// 4. the signature parses
/// 5. the signature verifies over the request transcript
///
/// An empty election id is rejected as a format error before any of these.
pub fn validate_fields<S: Signature>(
    fields: [&str; FIELD_COUNT],
) -> Result<SignatureRequest<S>, Error> {
    let [election_id, request_id, public_key, ballot, signature] = fields;

    if election_id.is_empty() {
        return Err(FormatError::EmptyElectionId.into());
    }

    let public_key = <S::PublicKey as PublicKey>::parse(public_key.as_bytes())
        .map_err(Error::InvalidPublicKey)?;

    if request_id.as_bytes() != public_key.sha512().as_slice() {
        return Err(Error::IdentityMismatch);
    }

    // Content is opaque (possibly blinded); only the encoding is checked.
    decode_ballot_text(ballot)?;

    let signature = S::parse(signature.as_bytes()).map_err(Error::InvalidSignatureFormat)?;

    let request = SignatureRequest::from_trusted_parts(
        election_id.to_owned(),
        request_id.to_owned(),
        public_key,
        ballot.to_owned(),
        signature,
    );
    verify_request(&request)?;

    Ok(request)
}

/// Split and validate a raw request
pub fn decode_request<S: Signature>(raw: &[u8]) -> Result<SignatureRequest<S>, Error> {
    let result = split_fields(raw)
        .map_err(Error::from)
        .and_then(validate_fields);

    match &result {
        Ok(request) => tracing::trace!(
            election_id = request.election_id(),
            "accepted signature request"
        ),
        Err(e) => tracing::debug!(kind = ?e.kind(), error = %e, "rejected signature request"),
    }

    result
}

use crate::*;

/// Build the signing transcript of a request: election id, request id,
/// public key and ballot joined by the field delimiter. The signature itself
/// is never part of the transcript.
pub fn transcript(election_id: &str, request_id: &str, public_key: &str, ballot: &str) -> Vec<u8> {
    join_fields(&[election_id, request_id, public_key, ballot]).into_bytes()
}

/// Verify the voter's signature over a request's transcript under the
/// request's own public key.
///
/// Only meaningful once the key, request id, ballot and signature have been
/// parsed and checked; see `validate_fields`.
pub fn verify_request<S: Signature>(request: &SignatureRequest<S>) -> Result<(), Error> {
    request
        .signature()
        .verify(request.public_key(), &request.transcript())?;
    Ok(())
}

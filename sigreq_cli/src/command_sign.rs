use crate::config::Config;
use rand::{CryptoRng, RngCore};
use rsa::RsaPrivateKey;
use sigreq::{RsaSignatureRequest, Signature};

pub fn command_sign(matches: &clap::ArgMatches, config: &Config) {
    // Unwrap is OK, INPUT is required
    let input = matches.value_of("INPUT").unwrap();
    let raw = crate::strip_line_ending(crate::read_input("sign", input));
    let secret = crate::load_secret_key("sign", matches, config);

    let mut rng = rand::thread_rng();
    match sign_request(&raw, &secret, &mut rng) {
        Ok(signature) => println!("{}", signature),
        Err(e) => {
            eprintln!("sigreq sign: {} ({:?})", e, e.kind());
            std::process::exit(1);
        }
    }
}

/// Validate a raw request and sign its ballot, returning the signature in
/// canonical form
pub fn sign_request<R: RngCore + CryptoRng>(
    raw: &[u8],
    authority: &RsaPrivateKey,
    rng: &mut R,
) -> Result<String, sigreq::Error> {
    let request = RsaSignatureRequest::from_bytes(raw)?;

    tracing::info!(
        election_id = request.election_id(),
        request_id = request.request_id(),
        "signing ballot"
    );

    let signature = request.sign_ballot(authority, rng)?;
    Ok(signature.canonical_string())
}

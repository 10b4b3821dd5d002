use crate::config::Config;
use rsa::RsaPrivateKey;
use sigreq::RsaSignatureRequest;

pub fn command_request(matches: &clap::ArgMatches, config: &Config) {
    // Unwraps are OK, both these args are required
    let election_id = matches.value_of("ELECTION-ID").unwrap();
    let ballot = crate::read_input("request", matches.value_of("BALLOT").unwrap());
    let secret = crate::load_secret_key("request", matches, config);

    match build_request(election_id, &ballot, &secret) {
        Ok(request) => println!("{}", request),
        Err(e) => {
            eprintln!("sigreq request: {}", e);
            std::process::exit(1);
        }
    }
}

/// Wire form of a new request over `ballot`, signed with the voter's key
pub fn build_request(
    election_id: &str,
    ballot: &[u8],
    secret: &RsaPrivateKey,
) -> Result<String, sigreq::Error> {
    let mut rng = rand::thread_rng();
    let request = RsaSignatureRequest::new_signed(election_id, ballot, secret, &mut rng)?;

    tracing::info!(
        election_id,
        request_id = request.request_id(),
        "created signature request"
    );

    Ok(request.to_string())
}

use crate::config::Config;
use rsa::pkcs8::{EncodePrivateKey, LineEnding};
use rsa::RsaPrivateKey;
use sigreq::{sha512_hex, PublicKey};
use std::fs::File;
use std::io::prelude::*;

pub fn command_keygen(matches: &clap::ArgMatches, config: &Config) {
    let secret_location = crate::secret_location("keygen", matches, config);
    let keysize: usize = match matches.value_of("keysize") {
        Some(keysize) => keysize.parse().unwrap_or_else(|_| {
            eprintln!("sigreq keygen: invalid keysize {}", keysize);
            std::process::exit(1);
        }),
        None => config.key_bits,
    };

    if keysize < 2048 {
        tracing::warn!(keysize, "using insecure keysize");
    }

    let (secret, pem) = generate(keysize).unwrap_or_else(|e| {
        eprintln!("sigreq keygen: {}", e);
        std::process::exit(1);
    });

    let mut file = File::create(&secret_location).unwrap_or_else(|e| {
        eprintln!(
            "sigreq keygen: cannot create file {}: {}",
            &secret_location, e
        );
        std::process::exit(1);
    });

    file.write_all(pem.as_bytes()).unwrap_or_else(|e| {
        eprintln!(
            "sigreq keygen: unable to write secret to {}: {}",
            &secret_location, e
        );
        std::process::exit(1);
    });

    let summary = serde_json::to_string_pretty(&summary(&secret)).unwrap_or_else(|e| {
        eprintln!("sigreq keygen: unable to render public key summary: {}", e);
        std::process::exit(1);
    });
    println!("{}", summary);
}

/// Generate a private key and its PKCS#8 PEM encoding
pub fn generate(bits: usize) -> Result<(RsaPrivateKey, String), String> {
    let mut rng = rand::thread_rng();
    let secret = RsaPrivateKey::new(&mut rng, bits).map_err(|e| e.to_string())?;
    let pem = secret
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| e.to_string())?;

    Ok((secret, pem.to_string()))
}

/// The public key and the request id a voter holding `secret` would present
pub fn summary(secret: &RsaPrivateKey) -> serde_json::Value {
    let public_key = secret.to_public_key().canonical_string();
    let request_id = sha512_hex(public_key.as_bytes());

    serde_json::json!({
        "public_key": public_key,
        "request_id": request_id,
    })
}

use thiserror::Error;

/// The kind of failure, without its cause.
///
/// Each check performed on an incoming request maps to exactly one kind, so a
/// caller can tell which contract was violated from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Format,
    InvalidPublicKey,
    IdentityMismatch,
    InvalidBallotEncoding,
    InvalidSignatureFormat,
    SignatureVerificationFailed,
    Signing,
}

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("sigreq: cannot read signature request - invalid format: {0}")]
    Format(#[from] FormatError),

    #[error("sigreq: invalid public key: {0}")]
    InvalidPublicKey(#[source] ParseError),

    #[error(
        "sigreq: invalid request id - a request id must be the (hex encoded) SHA-512 of the voter's public key"
    )]
    IdentityMismatch,

    #[error("sigreq: ballot must be base64 encoded: {0}")]
    InvalidBallotEncoding(#[from] base64::DecodeError),

    #[error("sigreq: invalid signature format: {0}")]
    InvalidSignatureFormat(#[source] ParseError),

    #[error(
        "sigreq: invalid signature - the signature does not sign this request or does not match the public key provided: {0}"
    )]
    SignatureVerificationFailed(#[from] VerificationError),

    #[error("sigreq: failed to sign ballot: {0}")]
    Signing(#[from] SigningError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::InvalidPublicKey(_) => ErrorKind::InvalidPublicKey,
            Error::IdentityMismatch => ErrorKind::IdentityMismatch,
            Error::InvalidBallotEncoding(_) => ErrorKind::InvalidBallotEncoding,
            Error::InvalidSignatureFormat(_) => ErrorKind::InvalidSignatureFormat,
            Error::SignatureVerificationFailed(_) => ErrorKind::SignatureVerificationFailed,
            Error::Signing(_) => ErrorKind::Signing,
        }
    }
}

/// Structural defects found before any field is interpreted
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected 5 fields, found {0}")]
    WrongFieldCount(usize),

    #[error("request is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),

    #[error("election id is empty")]
    EmptyElectionId,

    #[error("{0} contains the field delimiter")]
    DelimiterInField(&'static str),
}

/// Failure to parse a public key or signature from its canonical form
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty value")]
    Empty,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid RSA public key: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),

    #[error("invalid ed25519 value: {0}")]
    Ed25519(#[from] ed25519_dalek::SignatureError),

    #[error("wrong length - expected {expected} bytes, found {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Cryptographic verification failure
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("RSA: {0}")]
    Rsa(#[from] rsa::Error),

    #[error("ed25519: {0}")]
    Ed25519(#[from] ed25519_dalek::SignatureError),
}

/// Failure of the underlying signing primitive
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("RSA: {0}")]
    Rsa(#[from] rsa::Error),
}

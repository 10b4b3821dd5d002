//! Signature requests for blind-signature voting.
//!
//! A voter sends the election authority a [`SignatureRequest`]: the election
//! id, a request id binding the request to the voter's public key, the key
//! itself, a (possibly blinded) ballot and the voter's signature over those
//! four fields. The authority decodes and validates it, then countersigns the
//! ballot with [`sign_ballot`].

mod codec;
mod ed25519_scheme;
mod error;
mod request;
mod rsa_scheme;
mod scheme;
mod signer;
mod validate;
mod verify;

pub use codec::*;
pub use error::*;
pub use request::*;
pub use rsa_scheme::*;
pub use scheme::*;
pub use signer::*;
pub use validate::*;
pub use verify::*;

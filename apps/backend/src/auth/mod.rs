pub mod bearer;
pub mod claims;
pub mod error;
pub mod gate;
pub mod key_set;
pub mod scopes;
pub mod verifier;


pub use claims::ClaimSet;
pub use error::AuthError;
pub use gate::authorize;
pub use key_set::{KeySetCache, KeySource, RemoteKeySource, StaticKeySource};
pub use verifier::CredentialVerifier;

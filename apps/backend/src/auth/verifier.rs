use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use tracing::{debug, warn};

use super::bearer::token_from_header;
use super::claims::ClaimSet;
use super::error::{AuthError, ClaimProblem, HeaderProblem};
use super::key_set::KeySetCache;

/// Turns an `Authorization` header into a verified [`ClaimSet`].
///
/// Holds the issuer and audience to validate against and the key set cache
/// used for signature checks. One instance serves the whole process.
pub struct CredentialVerifier {
    issuer: String,
    audience: String,
    keys: KeySetCache,
}

impl CredentialVerifier {
    pub fn new(issuer: impl Into<String>, audience: impl Into<String>, keys: KeySetCache) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            keys,
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub async fn verify(&self, header: Option<&str>) -> Result<ClaimSet, AuthError> {
        let token = token_from_header(header)?;

        let jose = decode_header(token).map_err(|e| {
            debug!(error = %e, "token header did not decode");
            AuthError::InvalidHeader(HeaderProblem::Unparseable)
        })?;
        let kid = jose
            .kid
            .ok_or(AuthError::InvalidHeader(HeaderProblem::MissingKeyId))?;

        let key = match self.keys.decoding_key(&kid).await {
            Ok(Some(key)) => key,
            Ok(None) => {
                debug!(kid = %kid, "no key for kid");
                return Err(AuthError::InvalidHeader(HeaderProblem::UnknownKey));
            }
            Err(e) => {
                warn!(error = %e, "cannot verify token without key set");
                return Err(AuthError::InvalidHeader(HeaderProblem::KeySetUnavailable));
            }
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        decode::<ClaimSet>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(classify)
    }
}

fn classify(err: JwtError) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature
        | ErrorKind::InvalidAlgorithm
        | ErrorKind::InvalidAlgorithmName
        | ErrorKind::InvalidKeyFormat => AuthError::InvalidToken,
        ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => {
            AuthError::InvalidClaims(ClaimProblem::AudienceOrIssuer)
        }
        other => {
            debug!(error = ?other, "token did not decode");
            AuthError::InvalidHeader(HeaderProblem::Unparseable)
        }
    }
}

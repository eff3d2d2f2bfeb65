//
//  twitter-rest
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/18.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth 1.0a Request Signing
//!
//! Twitter authenticates user-context requests with OAuth 1.0a HMAC-SHA1
//! signatures carried in the `Authorization` header.
//!
//! ## Signature Steps
//!
//! 1. Collect the request parameters (query or form body) plus the `oauth_*`
//!    protocol parameters
//! 2. Percent-encode every key and value (RFC 3986) and sort by key, then value
//! 3. Build the base string `METHOD&enc(url)&enc(param_string)`
//! 4. Sign it with HMAC-SHA1 keyed by `enc(consumer_secret)&enc(token_secret)`
//! 5. Base64-encode the digest into `oauth_signature`
//!
//! ## Example
//!
//! ```rust
//! use twitter_rest::auth::{Credentials, OAuthSigner, RequestSigner};
//!
//! let credentials = Credentials::new("ck", "cs", "at", "ats");
//! let signer = OAuthSigner::from_credentials(&credentials).expect("complete credentials");
//!
//! let header = signer
//!     .authorization("GET", "https://api.twitter.com/1.1/statuses/home_timeline.json", &[])
//!     .unwrap();
//! assert!(header.starts_with("OAuth oauth_consumer_key=\"ck\""));
//! ```

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore;
use sha1::Sha1;

use super::{Credentials, RequestSigner};
use crate::api::common::{Result, TwitterError};

/// Everything except RFC 3986 unreserved characters is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Signs requests with a consumer key pair and an access token pair.
#[derive(Clone)]
pub struct OAuthSigner {
    consumer_key: String,
    consumer_secret: String,
    token: String,
    token_secret: String,
}

impl std::fmt::Debug for OAuthSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthSigner")
            .field("consumer_key", &self.consumer_key)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl OAuthSigner {
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        token: &str,
        token_secret: &str,
    ) -> Self {
        Self {
            consumer_key: consumer_key.to_string(),
            consumer_secret: consumer_secret.to_string(),
            token: token.to_string(),
            token_secret: token_secret.to_string(),
        }
    }

    /// Builds a signer when all four credential fields are present.
    pub fn from_credentials(credentials: &Credentials) -> Option<Self> {
        Some(Self::new(
            credentials.consumer_key.as_deref()?,
            credentials.consumer_secret.as_deref()?,
            credentials.access_token_key.as_deref()?,
            credentials.access_token_secret.as_deref()?,
        ))
    }

    /// Produces the header value for a fixed nonce and timestamp.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP method, any case
    /// * `url` - Request URL without the query string
    /// * `params` - Query or form parameters sent with the request
    /// * `nonce` - Single-use random token
    /// * `timestamp` - Epoch seconds
    pub fn sign(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let mut encoded: Vec<(String, String)> = oauth_params
            .iter()
            .chain(params.iter())
            .map(|(k, v)| (encode(k), encode(v)))
            .collect();
        encoded.sort();

        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_ascii_uppercase(),
            encode(url),
            encode(&param_string)
        );
        let signing_key = format!(
            "{}&{}",
            encode(&self.consumer_secret),
            encode(&self.token_secret)
        );

        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .map_err(|e| TwitterError::Signing(e.to_string()))?;
        mac.update(base_string.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {header}"))
    }
}

impl RequestSigner for OAuthSigner {
    fn authorization(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp();
        self.sign(method, url, params, &generate_nonce(), timestamp)
    }
}

/// Percent-encodes per RFC 3986.
pub fn encode(s: &str) -> String {
    utf8_percent_encode(s, OAUTH_ENCODE_SET).to_string()
}

/// 32 hex characters of randomness.
fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_signer() -> OAuthSigner {
        OAuthSigner::new(
            "xvz1evFS4wEEPTGEFPHBog",
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
    }

    #[test]
    fn test_encode_rfc3986() {
        assert_eq!(encode("hello world"), "hello%20world");
        assert_eq!(encode("a+b=c&d"), "a%2Bb%3Dc%26d");
        assert_eq!(encode("safe-chars_.~"), "safe-chars_.~");
        assert_eq!(encode("☃"), "%E2%98%83");
    }

    #[test]
    fn test_reference_signature() {
        let params = vec![
            ("include_entities".to_string(), "true".to_string()),
            (
                "status".to_string(),
                "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
            ),
        ];
        let header = reference_signer()
            .sign(
                "post",
                "https://api.twitter.com/1.1/statuses/update.json",
                &params,
                "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg",
                1318622958,
            )
            .unwrap();

        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_timestamp=\"1318622958\""));
        assert!(!header.contains("status="));
    }

    #[test]
    fn test_nonce_is_random_hex() {
        let a = generate_nonce();
        let b = generate_nonce();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn test_incomplete_credentials_have_no_signer() {
        let mut credentials = Credentials::new("ck", "cs", "at", "ats");
        assert!(OAuthSigner::from_credentials(&credentials).is_some());
        credentials.access_token_secret = None;
        assert!(OAuthSigner::from_credentials(&credentials).is_none());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let text = format!("{:?}", reference_signer());
        assert!(!text.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
    }
}

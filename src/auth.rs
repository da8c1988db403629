// ABOUTME: HTTP Basic credential checking against the single configured account
// ABOUTME: Parses Authorization headers and compares secrets in constant time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication
//!
//! The API is guarded by HTTP Basic authentication. One account is configured
//! through [`crate::config::environment::AuthConfig`] and carries the single
//! static `USER` role.

use crate::config::environment::AuthConfig;
use crate::constants::auth::USER_ROLE;
use crate::errors::{AppError, AppResult};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use subtle::ConstantTimeEq;

const BASIC_SCHEME: &str = "Basic ";

/// Identity attached to a request once its credentials are accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Account name
    pub username: String,
    /// Granted role
    pub role: &'static str,
}

/// Validates Basic credentials against the configured account
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Create an authenticator for one account
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create an authenticator from configuration
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.username, &config.password)
    }

    /// Check the raw value of an `Authorization` header
    ///
    /// # Errors
    ///
    /// `AUTH_REQUIRED` when the header is absent, `AUTH_INVALID` when it is not
    /// a well-formed Basic header or the credentials do not match
    pub fn authenticate(&self, header: Option<&str>) -> AppResult<AuthenticatedUser> {
        let header = header.ok_or_else(AppError::auth_required)?;
        let (username, password) = decode_basic(header)?;

        // Evaluate both comparisons so timing does not reveal which one failed
        let user_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        if bool::from(user_ok & pass_ok) {
            Ok(AuthenticatedUser {
                username,
                role: USER_ROLE,
            })
        } else {
            Err(AppError::auth_invalid("Invalid username or password"))
        }
    }
}

impl std::fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn decode_basic(header: &str) -> AppResult<(String, String)> {
    let encoded = header
        .strip_prefix(BASIC_SCHEME)
        .or_else(|| header.strip_prefix("basic "))
        .ok_or_else(|| AppError::auth_invalid("Unsupported authorization scheme"))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AppError::auth_invalid("Malformed Basic credentials"))?;
    let decoded =
        String::from_utf8(decoded).map_err(|_| AppError::auth_invalid("Malformed Basic credentials"))?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| AppError::auth_invalid("Malformed Basic credentials"))?;

    Ok((username.to_owned(), password.to_owned()))
}

/// Build the `Authorization` header value for a credential pair
#[must_use]
pub fn basic_header_value(username: &str, password: &str) -> String {
    format!("{BASIC_SCHEME}{}", STANDARD.encode(format!("{username}:{password}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn authenticator() -> BasicAuthenticator {
        BasicAuthenticator::new("tsse", "sport")
    }

    #[test]
    fn test_valid_credentials_grant_user_role() {
        let header = basic_header_value("tsse", "sport");
        let user = authenticator().authenticate(Some(&header)).unwrap();

        assert_eq!(user.username, "tsse");
        assert_eq!(user.role, "USER");
    }

    #[test]
    fn test_missing_header_requires_auth() {
        let error = authenticator().authenticate(None).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthRequired);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let header = basic_header_value("tsse", "wrong");
        let error = authenticator().authenticate(Some(&header)).unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
    }

    #[test]
    fn test_password_containing_colon() {
        let authenticator = BasicAuthenticator::new("coach", "a:b");
        let header = basic_header_value("coach", "a:b");
        assert!(authenticator.authenticate(Some(&header)).is_ok());
    }

    #[test]
    fn test_malformed_headers_are_rejected() {
        for header in ["Bearer abc", "Basic not-base64!", "Basic dHNzZQ=="] {
            let error = authenticator().authenticate(Some(header)).unwrap_err();
            assert_eq!(error.code, ErrorCode::AuthInvalid, "header: {header}");
        }
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", authenticator());
        assert!(!rendered.contains("sport"));
    }
}

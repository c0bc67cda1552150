//! Operator authentication against the configured in-memory account list

use crate::domain_models::Operator;
use netserve_config::OperatorAccount;

/// Notification text when a simulated operation dies before reporting back
pub const GENERIC_FAILURE: &str = "Operation failed unexpectedly";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Check `username`/`password` against `accounts`
///
/// The username is matched after trimming surrounding whitespace; the
/// password must match exactly.
pub fn authenticate(
    accounts: &[OperatorAccount],
    username: &str,
    password: &str,
) -> Result<Operator, AuthError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    accounts
        .iter()
        .find(|account| account.username == username && account.password == password)
        .map(Operator::from)
        .ok_or(AuthError::InvalidCredentials)
}

//! Write protection for mutating commands.
//!
//! [`authorize`] decides from the verb and the resolved [`Credentials`] alone.
//! Reads always pass; writes pass only when the user opted in through
//! `POCKETSMITH_ALLOW_WRITES`. Callers run it before building any request.

use crate::command::Verb;
use crate::constants::ENV_ALLOW_WRITES;
use crate::credentials::Credentials;
use crate::error::{Error, Result};

/// Outcome of a gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Allow,
    Deny,
}

/// Pure decision for a verb under the given credentials.
pub fn check(verb: Verb, credentials: &Credentials) -> Permission {
    if !verb.is_mutating() || credentials.writes_allowed() {
        Permission::Allow
    } else {
        Permission::Deny
    }
}

/// Fails with [`Error::Permission`] when the verb is a denied write.
pub fn authorize(verb: Verb, credentials: &Credentials) -> Result<()> {
    match check(verb, credentials) {
        Permission::Allow => Ok(()),
        Permission::Deny => {
            tracing::debug!(?verb, "write blocked by gate");
            Err(Error::Permission(format!(
                "write operations are disabled; set {ENV_ALLOW_WRITES}=true to enable them"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn creds(writes_allowed: bool) -> Credentials {
        Credentials::new("key", writes_allowed).unwrap()
    }

    #[rstest]
    #[case(Verb::Create)]
    #[case(Verb::Update)]
    #[case(Verb::Delete)]
    #[case(Verb::Refresh)]
    #[case(Verb::Assign)]
    #[case(Verb::Unassign)]
    fn test_writes_denied_by_default(#[case] verb: Verb) {
        let err = authorize(verb, &creds(false)).unwrap_err();
        assert!(matches!(err, Error::Permission(_)));
        assert!(err.to_string().starts_with("write operations are disabled"));
        assert!(err.to_string().contains("POCKETSMITH_ALLOW_WRITES=true"));
    }

    #[rstest]
    #[case(Verb::Create)]
    #[case(Verb::Update)]
    #[case(Verb::Delete)]
    #[case(Verb::Refresh)]
    #[case(Verb::Assign)]
    #[case(Verb::Unassign)]
    fn test_writes_allowed_when_enabled(#[case] verb: Verb) {
        assert_eq!(authorize(verb, &creds(true)), Ok(()));
    }

    #[rstest]
    #[case(Verb::List)]
    #[case(Verb::Get)]
    #[case(Verb::AuthStatus)]
    #[case(Verb::Summary)]
    #[case(Verb::Trend)]
    fn test_reads_never_blocked(#[case] verb: Verb) {
        assert_eq!(check(verb, &creds(false)), Permission::Allow);
        assert_eq!(check(verb, &creds(true)), Permission::Allow);
    }
}

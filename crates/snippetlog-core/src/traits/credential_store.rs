//! Credential store trait.

use std::fmt;

/// The fixed set of entries a [`CredentialStore`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CredentialKey {
    AccessToken,
    RefreshToken,
    UserEmail,
}

impl CredentialKey {
    /// All keys, in storage order.
    pub const ALL: [CredentialKey; 3] = [
        CredentialKey::AccessToken,
        CredentialKey::RefreshToken,
        CredentialKey::UserEmail,
    ];

    /// The persisted entry name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::AccessToken => "accessToken",
            CredentialKey::RefreshToken => "refreshToken",
            CredentialKey::UserEmail => "userEmail",
        }
    }

    /// Looks a key up by its persisted entry name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide key/value holder for the session credentials.
///
/// Backends must not fail outward: when the underlying storage is
/// unavailable they keep working in memory and report the problem through
/// `tracing`. Writes to distinct keys are independent; last write wins.
pub trait CredentialStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: CredentialKey) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: CredentialKey, value: &str);

    /// Removes `key`. Removing an absent key is a no-op.
    fn remove(&self, key: CredentialKey);

    /// Removes every key.
    fn clear(&self) {
        for key in CredentialKey::ALL {
            self.remove(key);
        }
    }
}

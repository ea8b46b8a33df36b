use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory denylist of access tokens revoked before their natural
/// expiry (logout, account deletion). Entries drop off once the token
/// would have expired anyway.
#[derive(Clone, Default)]
pub struct TokenBlacklist {
    entries: Arc<RwLock<HashMap<String, i64>>>,
}

impl TokenBlacklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, token: &str, expires_at: i64) {
        let now = Utc::now().timestamp();
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, exp| *exp > now);
            entries.insert(token.to_owned(), expires_at);
        }
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        let now = Utc::now().timestamp();
        self.entries
            .read()
            .map(|entries| entries.get(token).is_some_and(|exp| *exp > now))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklisted_token_is_rejected_until_expiry() {
        let blacklist = TokenBlacklist::new();
        let future = Utc::now().timestamp() + 60;
        blacklist.insert("tok-a", future);
        assert!(blacklist.contains("tok-a"));
        assert!(!blacklist.contains("tok-b"));
    }

    #[test]
    fn expired_entries_are_ignored_and_pruned() {
        let blacklist = TokenBlacklist::new();
        let past = Utc::now().timestamp() - 60;
        blacklist.insert("stale", past);
        assert!(!blacklist.contains("stale"));

        // A later insert prunes the stale entry entirely.
        blacklist.insert("fresh", Utc::now().timestamp() + 60);
        assert!(blacklist.contains("fresh"));
        assert!(!blacklist.contains("stale"));
    }
}

/*
[INPUT]:  Bearer tokens issued by login or refresh
[OUTPUT]: Shared token retrieval and replacement
[POS]:    Auth layer - customer session storage
[UPDATE]: When session fields or sharing strategy change
*/

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::types::CustomerAuth;

/// Stored session data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    pub token: String,
    pub csrf_token: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Thread-safe bearer token holder, shared by clones of a customer client
#[derive(Debug, Clone)]
pub struct Session {
    data: Arc<RwLock<SessionData>>,
}

impl Session {
    /// Session from a bare bearer token
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_data(SessionData {
            token: token.into(),
            csrf_token: None,
            updated_at: Utc::now(),
        })
    }

    /// Session from a login or refresh response
    pub fn from_auth(auth: &CustomerAuth) -> Self {
        Self::from_data(session_data(auth))
    }

    fn from_data(data: SessionData) -> Self {
        Self {
            data: Arc::new(RwLock::new(data)),
        }
    }

    pub fn token(&self) -> String {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    pub fn csrf_token(&self) -> Option<String> {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .csrf_token
            .clone()
    }

    /// Snapshot of the session
    pub fn data(&self) -> SessionData {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the held token with a freshly issued one
    pub fn replace(&self, auth: &CustomerAuth) {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = session_data(auth);
    }
}

fn session_data(auth: &CustomerAuth) -> SessionData {
    SessionData {
        token: auth.token.clone(),
        csrf_token: Some(auth.csrf_token.clone()).filter(|token| !token.is_empty()),
        updated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Customer};
    use uuid::Uuid;

    fn auth(token: &str, csrf: &str) -> CustomerAuth {
        let now = Utc::now();
        CustomerAuth {
            csrf_token: csrf.to_string(),
            token: token.to_string(),
            customer: Customer {
                id: Uuid::new_v4(),
                created_at: now,
                updated_at: now,
                first_name: None,
                last_name: None,
                email: Some("someone@example.com".to_string()),
                phone_number: None,
                is_phone_number_verified: false,
                date_of_birth: None,
                social_security_number: None,
                live_mode: false,
                default_currency_id: None,
                address: Address::default(),
                external_customer_id: None,
            },
        }
    }

    #[test]
    fn test_new_session_has_token_only() {
        let session = Session::new("jwt-1");
        assert_eq!(session.token(), "jwt-1");
        assert!(session.csrf_token().is_none());
    }

    #[test]
    fn test_replace_is_visible_to_clones() {
        let session = Session::from_auth(&auth("jwt-1", "csrf-1"));
        let shared = session.clone();

        session.replace(&auth("jwt-2", ""));

        assert_eq!(shared.token(), "jwt-2");
        assert!(shared.csrf_token().is_none());
        assert_eq!(shared.data(), session.data());
    }
}

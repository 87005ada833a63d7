//! Bearer-token session tracking.
//!
//! This module provides a simple in-memory session store that maps opaque
//! bearer tokens to the logged-in user. Sessions live for the process
//! lifetime: a restart logs everyone out.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::Viewer;

/// In-memory session store.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Viewer>>>,
}

impl SessionStore {
    /// Create a new session store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a session for a user and return its token.
    ///
    /// A user may hold several concurrent sessions; each login mints a
    /// fresh token.
    pub fn create_session(&self, viewer: Viewer) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().insert(token.clone(), viewer);
        token
    }

    /// Resolve a token to its user, if the session exists.
    pub fn get_session(&self, token: &str) -> Option<Viewer> {
        self.sessions.read().get(token).cloned()
    }

    /// Revoke a session. Returns whether the token was live.
    pub fn revoke_session(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

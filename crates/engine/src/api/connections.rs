//! Connection management for WebSocket clients.
//!
//! Tracks connected clients and the account each one is bound to.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use charserver_domain::AccountId;

use crate::infrastructure::ports::SessionContext;

/// Information about a connected client.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    /// Unique ID for this connection
    pub connection_id: Uuid,
    /// Account and realm resolved at handshake
    pub session: SessionContext,
    pub connected_at: DateTime<Utc>,
}

/// Manages all active WebSocket connections.
pub struct ConnectionManager {
    connections: DashMap<Uuid, ConnectionInfo>,
}

impl ConnectionManager {
    /// Create a new connection manager.
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a new connection.
    pub fn register(&self, connection_id: Uuid, session: SessionContext) {
        self.connections.insert(
            connection_id,
            ConnectionInfo {
                connection_id,
                session,
                connected_at: Utc::now(),
            },
        );
        tracing::debug!(
            connection_id = %connection_id,
            account_id = %session.account_id,
            "Connection registered"
        );
    }

    /// Unregister a connection.
    pub fn unregister(&self, connection_id: Uuid) {
        if let Some((_, info)) = self.connections.remove(&connection_id) {
            tracing::debug!(
                connection_id = %info.connection_id,
                account_id = %info.session.account_id,
                connected_secs = (Utc::now() - info.connected_at).num_seconds(),
                "Connection unregistered"
            );
        }
    }

    /// Number of open sessions for an account.
    pub fn count_for_account(&self, account_id: AccountId) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.session.account_id == account_id)
            .count()
    }

    pub fn count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use charserver_domain::RealmId;

    fn session(account: u32) -> SessionContext {
        SessionContext::new(AccountId::new(account), RealmId::new(1))
    }

    #[test]
    fn register_and_unregister_track_connections() {
        let manager = ConnectionManager::new();
        let first = Uuid::new_v4();
        
        manager.register(first, session(1));
        manager.register(Uuid::new_v4(), session(1));
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.count_for_account(AccountId::new(1)), 2);
        assert_eq!(manager.count_for_account(AccountId::new(2)), 0);

        manager.unregister(first);
        assert_eq!(manager.count(), 1);
        assert_eq!(manager.count_for_account(AccountId::new(1)), 1);
    }

    #[test]
    fn unregistering_unknown_connection_is_a_no_op() {
        let manager = ConnectionManager::new();
        manager.unregister(Uuid::new_v4());
        assert_eq!(manager.count(), 0);
    }
}

//! Types shared across port boundaries.

use charserver_domain::{AccountId, RealmId};

/// Who is asking. Resolved by the session layer before any request reaches
/// a use case; the core never authenticates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub account_id: AccountId,
    pub realm_id: RealmId,
}

impl SessionContext {
    pub fn new(account_id: AccountId, realm_id: RealmId) -> Self {
        Self {
            account_id,
            realm_id,
        }
    }
}

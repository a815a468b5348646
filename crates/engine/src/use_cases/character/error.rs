//! Character roster operation errors.

use charserver_domain::SmartGuid;

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    /// The client named something that cannot be a character. Treated as
    /// protocol abuse: the session is torn down instead of answered.
    #[error("Malformed character identity: {0}")]
    MalformedIdentity(SmartGuid),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

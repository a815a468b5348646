//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (character store, template sets)
//! - Static reference data (race/class tables, spawn points)
//! - The ability-granting subsystem

mod error;
mod external;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CharacterRepo, TemplateSetRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{AbilityPort, ReferenceDataPort};

// =============================================================================
// Session Types
// =============================================================================
pub use types::SessionContext;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockTemplateSetRepo};

#[cfg(test)]
pub use external::{MockAbilityPort, MockReferenceDataPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;

//! Identity domain module.
//!
//! Turns the schema-less authentication response into one of four typed
//! user identities.
//!
//! # Module Structure
//!
//! - `model`: `Identity` tagged union and the `Role` discriminator
//! - `resolver`: projection of a raw login response into an `Identity`
//!
//! # Usage
//!
//! ```ignore
//! use score_core::identity::{resolve_identity, Identity, Role};
//! ```

mod model;
mod resolver;

// Re-export public API
pub use model::{AdminIdentity, CompanyIdentity, EmployeeIdentity, GroupIdentity, Identity, Role};
pub use resolver::{parse_managed_companies, resolve_identity};

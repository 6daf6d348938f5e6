//! Session domain module.
//!
//! - `model`: the process-wide `Session` (identity, selected company, epoch)
//! - `store`: persistence of a session through a `KeyValueStore`

mod model;
mod store;

pub use model::Session;
pub use store::{CURRENT_USER_KEY, SELECTED_COMPANY_KEY, SessionStore};

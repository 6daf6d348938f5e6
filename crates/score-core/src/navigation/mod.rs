//! Navigation domain module.
//!
//! - `route`: route tokens and which roles may see them
//! - `readiness`: data-readiness counters for the current identity
//! - `gate`: the pure decision policy choosing between loading, login and a page

mod gate;
mod readiness;
mod route;

pub use gate::{Decision, View, decide};
pub use readiness::{Readiness, ReadinessUpdate};
pub use route::Route;

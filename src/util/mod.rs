//! Page behaviors and the browser helpers they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each behavior module pairs pure decision logic (unit tested on the host)
//! with a hydrate-only `bind` shell that attaches it to the live DOM.

pub mod dark_mode;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod messages;
pub mod search;
pub mod validation;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`credentials`, `session`, `profile`) so
//! components depend on small focused models. Persistence goes through
//! `credentials` only.

pub mod credentials;
pub mod profile;
pub mod session;

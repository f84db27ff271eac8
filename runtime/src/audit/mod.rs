//! Request audit trail.

pub mod logger;

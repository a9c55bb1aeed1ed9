//! Wire types exchanged with the external REST backend.

pub mod creditor;
pub mod log;

// Creditor lookup helpers. The directory itself lives in the backend.

pub mod handlers;
pub mod sanitizer;

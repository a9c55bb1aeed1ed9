// Case notes: CRM paste -> profile -> note text -> log payload.
// Parsing and composition are pure; only handlers talk to the backend.

pub mod composer;
pub mod crm_parser;
pub mod handlers;
pub mod options;
pub mod payload;
pub mod third_party;

// Payment and submission deadlines.
// Pure date arithmetic lives in business_days; handlers only resolve "today".

pub mod business_days;
pub mod handlers;

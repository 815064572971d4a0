//! Command implementations

mod match_arns;
mod resolve;

pub use match_arns::match_arns;
pub use resolve::resolve;

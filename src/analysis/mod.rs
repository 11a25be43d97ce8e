pub mod analyzer;
pub mod heuristic;
pub mod validator;

pub use analyzer::Analyzer;
pub use heuristic::classify;
pub use validator::validate;

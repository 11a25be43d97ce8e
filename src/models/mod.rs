pub mod analysis;
pub mod issue;

pub use analysis::*;
pub use issue::*;

mod extract_terms;
pub mod prompt;

pub use extract_terms::*;

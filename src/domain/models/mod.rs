mod search_terms;

pub use search_terms::*;

pub mod container;
pub mod controller;
pub mod router;

pub use container::Container;
pub use router::build_router;

pub mod health_controller;
pub mod query_controller;

pub use query_controller::{ProcessQueryRequest, ProcessQueryResponse};

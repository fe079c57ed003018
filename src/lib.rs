pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ChatClient, ExtractTermsUseCase};

pub use connector::api::{build_router, Container};
pub use connector::GroqClient;

pub use domain::{DomainError, SearchTerms};

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ExtractTermsUseCase;
use crate::connector::adapter::GroqClient;

/// Holds the long-lived dependencies shared by every request.
///
/// Built once at startup and never mutated afterwards, so it is safe to share
/// across concurrently served requests behind an `Arc`.
pub struct Container {
    extract_use_case: Arc<ExtractTermsUseCase>,
}

impl Container {
    pub fn new(extract_use_case: ExtractTermsUseCase) -> Self {
        Self {
            extract_use_case: Arc::new(extract_use_case),
        }
    }

    /// Wire the container from environment variables.
    ///
    /// A missing `GROQ_API_KEY` is logged once and leaves extraction disabled
    /// for the lifetime of the process; the server still starts and every
    /// request degrades to an absent `search_terms`.
    pub fn from_env() -> Self {
        let extract_use_case = match GroqClient::from_env() {
            Some(client) => {
                info!("Groq completion client initialized (model: {})", client.model());
                ExtractTermsUseCase::new(Arc::new(client))
            }
            None => {
                warn!(
                    "GROQ_API_KEY is not set; extraction is disabled and every request \
                     will return absent search_terms"
                );
                ExtractTermsUseCase::disabled()
            }
        };

        Self::new(extract_use_case)
    }

    pub fn extract_use_case(&self) -> Arc<ExtractTermsUseCase> {
        self.extract_use_case.clone()
    }
}

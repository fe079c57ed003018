use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::interfaces::ChatClient;
use crate::application::use_cases::prompt::{build_user_prompt, SYSTEM_PROMPT};
use crate::domain::SearchTerms;

/// Fallback product name when the model omits one of the expected keys.
const MISSING_PRODUCT: &str = "N/A";

/// Wire shape of the model's reply. Unknown keys are ignored; missing keys
/// default so one absent field does not discard an otherwise usable reply.
#[derive(Deserialize)]
struct RawTerms {
    #[serde(default = "default_product")]
    english_product: String,
    #[serde(default)]
    english_attributes: Vec<String>,
    #[serde(default = "default_product")]
    french_product: String,
    #[serde(default)]
    french_attributes: Vec<String>,
}

fn default_product() -> String {
    MISSING_PRODUCT.to_string()
}

/// Turns a free-text product query into bilingual structured [`SearchTerms`]
/// by delegating the extraction to a [`ChatClient`].
///
/// Failure policy: this use case never returns an error. A disabled client
/// (no credential at startup), a failed completion call, or an unparseable
/// reply all collapse to [`SearchTerms::sentinel`], so the HTTP layer always
/// has a well-formed record to map into the response contract.
pub struct ExtractTermsUseCase {
    chat_client: Option<Arc<dyn ChatClient>>,
}

impl ExtractTermsUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client: Some(chat_client),
        }
    }

    /// Construct a permanently degraded use case: every call short-circuits to
    /// the sentinel record without attempting a network call. Used when the
    /// completion credential is absent at startup.
    pub fn disabled() -> Self {
        Self { chat_client: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.chat_client.is_some()
    }

    pub async fn execute(&self, query: &str) -> SearchTerms {
        let Some(client) = &self.chat_client else {
            return SearchTerms::sentinel();
        };

        match client.complete(SYSTEM_PROMPT, &build_user_prompt(query)).await {
            Ok(raw) => {
                debug!("raw model output: {raw:?}");
                Self::parse_terms(&raw)
            }
            Err(e) => {
                warn!("completion call failed: {e}");
                SearchTerms::sentinel()
            }
        }
    }

    /// Decode the model's reply into [`SearchTerms`].
    ///
    /// Malformed JSON or a non-object shape yields the sentinel record —
    /// indistinguishable from a transport failure to the caller.
    fn parse_terms(text: &str) -> SearchTerms {
        match serde_json::from_str::<RawTerms>(text) {
            Ok(raw) => SearchTerms::new(
                raw.english_product,
                raw.english_attributes,
                raw.french_product,
                raw.french_attributes,
            ),
            Err(e) => {
                warn!("could not parse model response as JSON object ({e}): {text}");
                SearchTerms::sentinel()
            }
        }
    }
}

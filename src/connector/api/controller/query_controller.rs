use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::Container;
use crate::domain::SearchTerms;

#[derive(Debug, Deserialize)]
pub struct ProcessQueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessQueryResponse {
    pub original_query: String,
    /// Omitted from the body entirely when extraction failed. Absence is the
    /// caller's sole failure signal; the endpoint itself always answers 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_terms: Option<SearchTerms>,
}

/// `POST /process-query` — run the bilingual extraction for one query.
///
/// The sentinel failure record coming back from the use case is translated
/// here into the external "absent" convention; error strings never leak into
/// the response body.
pub async fn process_query(
    State(container): State<Arc<Container>>,
    Json(request): Json<ProcessQueryRequest>,
) -> Json<ProcessQueryResponse> {
    let terms = container.extract_use_case().execute(&request.query).await;

    let search_terms = (!terms.is_sentinel()).then_some(terms);

    Json(ProcessQueryResponse {
        original_query: request.query,
        search_terms,
    })
}

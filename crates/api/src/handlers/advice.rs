use advisor_core::relay;
use advisor_core::types::AdviceRequest;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppResult;
use crate::extract::AppForm;
use crate::state::AppState;

/// POST /advice
///
/// Form-encoded advice request. Always answers with the result page; input
/// rejections and model failures show a canned message tagged `error`.
pub async fn submit_advice(
    State(state): State<AppState>,
    AppForm(request): AppForm<AdviceRequest>,
) -> AppResult<Html<String>> {
    let result = relay::advise(state.generator.as_ref(), &request).await;
    Ok(Html(state.views.result(&result)?))
}

use axum::{
    extract::{Form, State},
    response::Html,
};
use tracing::{debug, instrument, warn};

use crate::api::handlers::errors::ErrorResponse;
use crate::api::state::AppState;
use crate::entities::form::FormSubmission;
use crate::render::render_page;

/// Render the form for the current session
#[instrument(skip(state))]
pub async fn show_form(State(state): State<AppState>) -> Result<Html<String>, ErrorResponse> {
    let session = state.lock_session()?;
    let view = session.view(state.service.as_ref());
    Ok(Html(render_page(&view, None)))
}

/// Apply a form submission and re-render
///
/// A failed prediction is shown on the page rather than as an error status.
#[instrument(skip(state))]
pub async fn submit_form(
    State(state): State<AppState>,
    Form(submission): Form<FormSubmission>,
) -> Result<Html<String>, ErrorResponse> {
    let service = state.service.as_ref();
    let mut session = state.lock_session()?;

    let (input, action) = submission.merge_into(session.input());
    debug!("Form interaction: {:?}", action);

    let page = match session.interact(input, action, service) {
        Ok(view) => render_page(&view, None),
        Err(e) => {
            warn!("Interaction failed: {}", e);
            let view = session.view(service);
            render_page(&view, Some(&format!("Could not estimate the premium: {}", e)))
        }
    };

    Ok(Html(page))
}

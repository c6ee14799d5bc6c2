use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    endpoints,
    service::StatementService,
    state::ServiceState,
};

/// Form data posted by the review page's mapping form.
///
/// The fields are parallel lists: `name[i]` pairs with `category[i]`. An
/// empty category means the merchant was left on the placeholder option.
#[derive(Deserialize)]
pub struct MappingForm {
    /// The unknown merchant names, one per row.
    #[serde(default)]
    pub name: Vec<String>,
    /// The selected categories, one per row.
    #[serde(default)]
    pub category: Vec<String>,
}

impl MappingForm {
    fn into_pairs(self) -> Vec<(String, String)> {
        self.name
            .into_iter()
            .zip(self.category)
            .filter(|(_, category)| !category.is_empty())
            .collect()
    }
}

/// Route handler for saving a merchant to category mapping.
///
/// The mapping is persisted by the statement service so future uploads
/// categorize these merchants automatically, then applied to the loaded
/// statement.
pub async fn save_mapping<S: StatementService>(
    State(state): State<ServiceState<S>>,
    Form(form): Form<MappingForm>,
) -> Result<Response, Response> {
    let pairs = form.into_pairs();

    if pairs.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Alert::ErrorSimple {
                message: "Pick a category for at least one merchant.".to_owned(),
            }
            .into_html(),
        )
            .into_response());
    }

    state
        .service
        .save_mapping(&pairs)
        .await
        .inspect_err(|error| tracing::error!("Could not save mapping: {error}"))
        .map_err(|error| error.into_alert_response())?;

    let remaining = {
        let mut statement = state.statement.lock().map_err(|error| {
            tracing::error!("could not acquire statement lock: {error}");
            Error::StatementLockError.into_alert_response()
        })?;

        statement.apply_mapping(&pairs);
        statement.unknowns.len()
    };

    tracing::info!(
        "Saved categories for {} merchants, {} left to review",
        pairs.len(),
        remaining
    );

    if remaining > 0 {
        return Ok((
            StatusCode::CREATED,
            Alert::Success {
                message: "Categories saved".to_owned(),
                details: format!("{remaining} merchants left to review."),
            }
            .into_html(),
        )
            .into_response());
    }

    Ok((
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

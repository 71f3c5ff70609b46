//! HTTP routes for advisor endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    create_advisor, delete_advisor, get_advisor_by_id, list_advisors, update_advisor,
    AdvisorHandlers,
};

/// Creates the advisor router with all endpoints.
pub fn advisor_routes(handlers: AdvisorHandlers) -> Router {
    Router::new()
        .route("/CreateAdvisor", post(create_advisor))
        .route("/ListAdvisors", get(list_advisors))
        .route("/GetAdvisorById/:advisor_id", get(get_advisor_by_id))
        .route("/UpdateAdvisor", put(update_advisor))
        .route("/DeleteAdvisor/:advisor_id", delete(delete_advisor))
        .with_state(handlers)
}

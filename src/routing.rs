//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};

use crate::{
    AppState,
    dashboard::{get_dashboard_page, get_summary},
    endpoints,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::SUMMARY_API, get(get_summary))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use axum_test::TestServer;

    use crate::{AppState, endpoints, metrics::Dataset, routing::get_index_page};

    use super::build_router;

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let state = AppState::new(Dataset::sample(), "Etc/UTC").unwrap();
        let server = TestServer::try_new(build_router(state)).expect("Could not create test server.");

        server
            .get("/does/not/exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

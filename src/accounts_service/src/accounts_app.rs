use std::sync::Arc;

use accounts_adapters::config::API_PREFIX;
use accounts_application::AccountService;
use accounts_axum::routes;
use accounts_core::{PasswordHasher, SessionTokenIssuer, UserStore};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the account service, mounted under the API prefix.
pub struct AccountsApp {
    router: Router,
}

impl AccountsApp {
    /// Build the router around a fully wired `AccountService`.
    ///
    /// The store, hasher and token issuer are chosen by the caller; tests
    /// use the in-memory store, the binary uses PostgreSQL.
    pub fn new<U, H, T>(service: AccountService<U, H, T>) -> Self
    where
        U: UserStore + 'static,
        H: PasswordHasher + 'static,
        T: SessionTokenIssuer + 'static,
    {
        let router = Router::new().nest(API_PREFIX, routes::router(Arc::new(service)));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert into a router that can be nested into a larger application.
    ///
    /// Origins that do not parse as header values are skipped with a warning.
    pub fn into_router(mut self, allowed_origins: &[String]) -> Router {
        if !allowed_origins.is_empty() {
            let origins: Vec<HeaderValue> = allowed_origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!(%origin, error = %e, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::list(origins));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve until the listener fails.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Accounts service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{get, post},
};
use gatehouse_adapters::http::routes::{health, login, register, test_endpoint};
use gatehouse_core::{CredentialHasher, TokenIssuer, UserDirectory};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Authentication service exposing registration, login and health routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService from its collaborators
    ///
    /// # Arguments
    /// * `user_directory` - Store holding user records (must be Clone)
    /// * `hasher` - Password hasher (must be Clone)
    /// * `token_issuer` - Signs session tokens on login (must be Clone)
    ///
    /// Each route only receives the collaborators it uses.
    pub fn new<D, H, T>(user_directory: D, hasher: H, token_issuer: T) -> Self
    where
        D: UserDirectory + Clone + 'static,
        H: CredentialHasher + Clone + 'static,
        T: TokenIssuer + Clone + 'static,
    {
        let router = Router::new()
            // Health checks need no state
            .route("/health", get(health))
            .route("/test", get(test_endpoint))
            // Register needs the directory and the hasher
            .route("/register", post(register::<D, H>))
            .with_state((user_directory.clone(), hasher.clone()))
            // Login additionally signs a token
            .route("/login", post(login::<D, H, T>))
            .with_state((user_directory, hasher, token_issuer));

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

    /// Convert the AuthService into a router that can be served or nested
    ///
    /// # Arguments
    /// * `allowed_origin` - The single origin allowed to make credentialed cross-origin calls
    pub fn as_router(mut self, allowed_origin: HeaderValue) -> Router {
        self.router = self.router.layer(cors_layer(allowed_origin));
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origin: HeaderValue,
    ) -> Result<(), std::io::Error> {
        let router = self.as_router(allowed_origin);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(allowed_origin))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
}

use std::sync::Arc;
use std::time::Duration;

use authkit::TokenCodec;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_user::create_user;
use super::handlers::forgot_password::forgot_password;
use super::handlers::google_sign_in::google_sign_in;
use super::handlers::redeem_password_reset::redeem_password_reset;
use super::handlers::refresh::refresh;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::users_by_role::users_by_role;
use super::handlers::whoami::whoami;
use super::middleware::require_auth;
use super::middleware::role_gate;
use super::middleware::RoleGate;
use crate::domain::auth::models::Role;
use crate::domain::auth::service::AuthService;
use crate::outbound::events::KafkaAuthEventProducer;
use crate::outbound::oauth::GoogleOAuthClient;
use crate::outbound::repositories::password_reset::PostgresPasswordResetRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

pub type AccountAuthService = AuthService<
    PostgresUserRepository,
    PostgresPasswordResetRepository,
    KafkaAuthEventProducer,
    GoogleOAuthClient,
>;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AccountAuthService>,
    pub token_codec: Arc<TokenCodec>,
}

pub fn create_router(auth_service: Arc<AccountAuthService>, token_codec: Arc<TokenCodec>) -> Router {
    let state = AppState {
        auth_service,
        token_codec,
    };

    let public_routes = Router::new()
        .route("/api/auth/signin", post(sign_in))
        .route("/api/auth/signup", post(sign_up))
        // Historical alias: clients call the reset request under either name
        .route("/api/auth/forget-password", post(forgot_password))
        .route("/api/auth/change-password", post(forgot_password))
        .route("/api/auth/redeem-password-reset", post(redeem_password_reset))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/google-signin", post(google_sign_in));

    let protected_routes = Router::new()
        .route("/api/auth/whoami", get(whoami))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.token_codec),
            require_auth,
        ));

    let admin_routes = Router::new()
        .route("/api/auth/users", post(create_user))
        .route("/api/auth/users", get(users_by_role))
        .route_layer(middleware::from_fn_with_state(
            RoleGate::allow(&[Role::Admin]),
            role_gate,
        ))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.token_codec),
            require_auth,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

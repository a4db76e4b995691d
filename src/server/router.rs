use crate::server::routes::student;
use crate::service::StudentService;

use axum::{
    Router,
    extract::Request,
    http::{
        HeaderName, HeaderValue, Method, StatusCode, Version,
        header::{CONTENT_TYPE, USER_AGENT},
    },
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct RollcallState {
    pub students: StudentService,
}

impl RollcallState {
    pub fn new(students: StudentService) -> Self {
        Self { students }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_string);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let path = uri.path();
    let protocol = format_http_version(version);
    let method = method.as_str();

    if resp.status().is_server_error() {
        error!(
            "| {status:>3} | {request_id} | {method:^7} | {protocol:<8} | {path} | {latency_ms}ms | {user_agent}"
        );
    } else if resp.status().is_client_error() {
        warn!(
            "| {status:>3} | {request_id} | {method:^7} | {protocol:<8} | {path} | {latency_ms}ms | {user_agent}"
        );
    } else {
        info!(
            "| {status:>3} | {request_id} | {method:^7} | {protocol:<8} | {path} | {latency_ms}ms | {user_agent}"
        );
    }

    resp
}

/// `allowed_origin` is the single browser origin granted CORS access.
pub fn rollcall_router(state: RollcallState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .merge(student::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors_layer(allowed_origin))
        .layer(middleware::from_fn(access_log))
}

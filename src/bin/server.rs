use axum::{
    Json, Router,
    routing::{get, post},
};
use box_stack::solver::Solver;
use box_stack::types::{BoxDims, StackResult, Stacking};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Deserialize, Serialize)]
struct StackRequest {
    a: BoxDims,
    b: BoxDims,
}

#[derive(Serialize)]
struct StackResponse {
    height: i64,
    feasible: bool,
    stacking: Option<Stacking>,
}

impl From<StackResult> for StackResponse {
    fn from(result: StackResult) -> Self {
        Self {
            // Heights are sums of two u32 edges, so they always fit.
            height: result.height().map_or(-1, |h| h as i64),
            feasible: result.is_feasible(),
            stacking: result.stacking().copied(),
        }
    }
}

async fn stack(Json(req): Json<StackRequest>) -> Json<StackResponse> {
    tracing::info!(
        body = serde_json::to_string(&req).unwrap_or_default(),
        "POST /stack"
    );

    let result = Solver::new(req.a, req.b).solve();
    Json(result.into())
}

fn app() -> Router {
    Router::new()
        .route("/up", get(|| async { "ok" }))
        .route("/stack", post(stack))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

fn main() {
    let _sentry = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("development.log")
        .expect("failed to open development.log");

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(serve());
}

async fn serve() {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    eprintln!("Listening on {addr}");
    axum::serve(listener, app()).await.unwrap();
}

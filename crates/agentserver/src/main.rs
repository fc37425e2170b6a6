use actix_cors::Cors;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use agentcore::GraphState;
use agentnodes::{analyse_css, stdout_sink, OutputSink};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
struct AppState {
    sink: OutputSink,
}

/// Response for the analysis endpoint
#[derive(Debug, Serialize)]
struct AnalysisResponse {
    status: &'static str,
    analysis: GraphState,
}

/// Error response
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Root endpoint
#[get("/")]
async fn read_root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "Hello": "World"
    }))
}

/// Health check endpoint
#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy"
    }))
}

/// Trigger the demo analysis pipeline.
///
/// The body is accepted as raw bytes and discarded; the pipeline always
/// starts from an empty state, so the response is the same for every input.
#[post("/api/analyse-css")]
async fn analyse_css_endpoint(data: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    info!(body_len = body.len(), "analysis requested");

    match analyse_css(Arc::clone(&data.sink)).await {
        Ok(result) => HttpResponse::Ok().json(AnalysisResponse {
            status: "success",
            analysis: result,
        }),
        Err(e) => {
            error!("analysis pipeline failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind_address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    info!("Server starting on http://{}", bind_address);

    let app_state = web::Data::new(AppState {
        sink: stdout_sink(),
    });

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(app_state.clone())
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .service(read_root)
            .service(health_check)
            .service(analyse_css_endpoint)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

//! Web API Module
//!
//! Exposes the coach to a frontend over JSON endpoints.
//! All endpoints return JSON and require no authentication (demo mode).

use crate::coach::{
    AnswerComposer, CoachError, ComposedAnswer, ContextSummary, InterestTag, StageTag, StoryCatalog,
    UserContext,
};
use crate::config::ServerConfig;
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared, read-only application state
#[derive(Debug)]
pub struct AppState {
    pub composer: AnswerComposer,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_catalog(StoryCatalog::sample())
    }

    pub fn with_catalog(catalog: StoryCatalog) -> Self {
        Self {
            composer: AnswerComposer::new(catalog),
        }
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
    /// Stage label; omitted means the default stage
    pub stage: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl AskRequest {
    /// Turns the raw form fields into a validated user context
    pub fn into_context(self) -> Result<UserContext, CoachError> {
        let stage = self
            .stage
            .as_deref()
            .map(StageTag::from_label)
            .unwrap_or_default();
        let interests = InterestTag::parse_all(&self.interests)?;

        let ctx = UserContext {
            stage,
            interests,
            question: self.question,
        };
        ctx.validate()?;
        Ok(ctx)
    }
}

/// Composed answer plus who it was composed for
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub context: ContextSummary,
    #[serde(flatten)]
    pub answer: ComposedAnswer,
}

/// Form options for the frontend
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionsResponse {
    pub stages: Vec<String>,
    pub default_stage: String,
    pub interests: Vec<String>,
}

impl OptionsResponse {
    pub fn current() -> Self {
        Self {
            stages: StageTag::ALL.iter().map(|s| s.label().to_string()).collect(),
            default_stage: StageTag::default().label().to_string(),
            interests: InterestTag::ALL.iter().map(|t| t.label().to_string()).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Coach API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Stage and interest choices, with the preselected stage
async fn get_options() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(OptionsResponse::current()))
}

/// All sample stories
async fn get_stories(data: web::Data<Arc<AppState>>) -> impl Responder {
    let stories = data.composer.catalog().list_stories().to_vec();
    HttpResponse::Ok().json(ApiResponse::success(stories))
}

/// Ask the coach a question
async fn ask(data: web::Data<Arc<AppState>>, req: web::Json<AskRequest>) -> impl Responder {
    let ctx = match req.into_inner().into_context() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("Rejected question: {}", e);
            return HttpResponse::BadRequest().json(ApiResponse::<()>::error(&e.to_string()));
        }
    };

    let answer = data.composer.compose_context(&ctx);
    info!(
        "Answered question (stage: {}, interests: {})",
        ctx.stage.label(),
        ctx.interests.len()
    );
    debug!("Composed {} chars with {} stories", answer.text.len(), answer.stories.len());

    HttpResponse::Ok().json(ApiResponse::success(AskResponse {
        context: ctx.summary(),
        answer,
    }))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Registers every route on an app
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/api/options", web::get().to(get_options))
        .route("/api/stories", web::get().to(get_stories))
        .route("/api/ask", web::post().to(ask));
}

/// Configure and run the API server
pub async fn run_server(config: &ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new());

    info!("Career Coach API starting at http://{}:{}", config.host, config.port);
    info!("API Endpoints:");
    info!("   GET  /health        - Health check");
    info!("   GET  /api/options   - Stage and interest choices");
    info!("   GET  /api/stories   - Sample career stories");
    info!("   POST /api/ask       - Ask the coach");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(question: &str, stage: Option<&str>, interests: &[&str]) -> AskRequest {
        AskRequest {
            question: question.to_string(),
            stage: stage.map(str::to_string),
            interests: interests.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_missing_stage_defaults_to_college() {
        let ctx = request("Where do I start?", None, &[]).into_context().unwrap();
        assert_eq!(ctx.stage, StageTag::College);
    }

    #[test]
    fn test_unknown_stage_maps_to_other() {
        let ctx = request("Where do I start?", Some("Retiree"), &[]).into_context().unwrap();
        assert_eq!(ctx.stage, StageTag::Other);
    }

    #[test]
    fn test_blank_question_rejected() {
        let err = request("  ", Some("College"), &[]).into_context().unwrap_err();
        assert_eq!(err, CoachError::EmptyQuestion);
    }

    #[test]
    fn test_unknown_interest_rejected() {
        let err = request("q", None, &["Sports"]).into_context().unwrap_err();
        assert_eq!(err, CoachError::UnknownInterest("Sports".to_string()));
    }

    #[test]
    fn test_options_lists_every_choice() {
        let options = OptionsResponse::current();
        assert_eq!(options.stages, vec!["High school", "College", "Career switcher", "Other"]);
        assert_eq!(options.default_stage, "College");
        assert_eq!(options.interests.len(), 6);
        assert_eq!(options.interests[5], "Business / startups");
    }
}

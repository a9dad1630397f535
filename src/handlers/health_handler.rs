use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let db_health = match &state.db {
        Some(db) => db.health_check().await,
        None => Ok(()),
    };

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": match (&state.db, &db_health) {
                (None, _) => "not_configured",
                (Some(_), Ok(())) => "ok",
                (Some(_), Err(_)) => "error",
            }
        }
    });

    if let Err(err) = &db_health {
        log::warn!("Readiness check failed: {}", err);
        return HttpResponse::ServiceUnavailable().json(response);
    }
    HttpResponse::Ok().json(response)
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

use crate::content::{guides, WellnessCard};
use axum::Json;
use serde::Serialize;

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_guides() -> Json<&'static [WellnessCard]> {
    Json(guides())
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

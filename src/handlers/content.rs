use axum::Json;

use crate::services::content::{self, FirmProfile, PracticeArea, TeamMember};

// GET /api/content/practice-areas
pub async fn practice_areas() -> Json<Vec<PracticeArea>> {
    Json(content::practice_areas())
}

// GET /api/content/team
pub async fn team() -> Json<Vec<TeamMember>> {
    Json(content::team())
}

// GET /api/content/firm
pub async fn firm() -> Json<FirmProfile> {
    Json(content::firm_profile())
}

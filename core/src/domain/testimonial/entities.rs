use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    pub client_id: Uuid,
    pub coach_id: Option<Uuid>,
    pub content: String,
    pub rating: Option<i32>,
    pub status: String, // 'draft' | 'approved' | 'published'
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

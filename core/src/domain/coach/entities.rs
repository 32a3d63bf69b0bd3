use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coach {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: String, // 'active' | 'inactive'
    pub specialization_id: Option<Uuid>,
    pub max_clients: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

use chrono::Utc;

use crate::{domain::coach::entities::Coach, entity::coaches::Model as CoachModel};

impl From<CoachModel> for Coach {
    fn from(model: CoachModel) -> Self {
        Coach {
            id: model.id,
            name: model.name,
            email: model.email,
            status: model.status,
            specialization_id: model.specialization_id,
            max_clients: model.max_clients,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

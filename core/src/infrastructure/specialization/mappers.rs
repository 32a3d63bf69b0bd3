use chrono::Utc;

use crate::{
    domain::specialization::entities::Specialization,
    entity::specializations::Model as SpecializationModel,
};

impl From<SpecializationModel> for Specialization {
    fn from(model: SpecializationModel) -> Self {
        Specialization {
            id: model.id,
            name: model.name,
            description: model.description,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

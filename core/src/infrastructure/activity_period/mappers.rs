use chrono::Utc;

use crate::{
    domain::activity_period::entities::ActivityPeriod,
    entity::activity_periods::Model as ActivityPeriodModel,
};

impl From<ActivityPeriodModel> for ActivityPeriod {
    fn from(model: ActivityPeriodModel) -> Self {
        ActivityPeriod {
            id: model.id,
            client_id: model.client_id,
            coach_id: model.coach_id,
            kind: model.kind,
            start_date: model.start_date,
            end_date: model.end_date,
            notes: model.notes,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

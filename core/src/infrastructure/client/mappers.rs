use chrono::Utc;

use crate::{domain::client::entities::Client, entity::clients::Model as ClientModel};

impl From<ClientModel> for Client {
    fn from(model: ClientModel) -> Self {
        Client {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            status: model.status,
            coach_id: model.coach_id,
            product_id: model.product_id,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

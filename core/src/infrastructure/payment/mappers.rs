use chrono::Utc;

use crate::{domain::payment::entities::Payment, entity::payments::Model as PaymentModel};

impl From<PaymentModel> for Payment {
    fn from(model: PaymentModel) -> Self {
        Payment {
            id: model.id,
            client_id: model.client_id,
            amount: model.amount,
            currency: model.currency,
            status: model.status,
            payment_method: model.payment_method,
            paid_at: model.paid_at.map(|dt| dt.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

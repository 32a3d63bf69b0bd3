use chrono::Utc;

use crate::{
    domain::testimonial::entities::Testimonial, entity::testimonials::Model as TestimonialModel,
};

impl From<TestimonialModel> for Testimonial {
    fn from(model: TestimonialModel) -> Self {
        Testimonial {
            id: model.id,
            client_id: model.client_id,
            coach_id: model.coach_id,
            content: model.content,
            rating: model.rating,
            status: model.status,
            category: model.category,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

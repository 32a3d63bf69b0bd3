use crate::{
    domain::testimonial::entities::Testimonial,
    entity::testimonials,
    infrastructure::collection::repository::PostgresCollectionRepository,
};

pub mod mappers;

pub type PostgresTestimonialRepository =
    PostgresCollectionRepository<testimonials::Entity, Testimonial>;

pub mod activity_periods;
pub mod clients;
pub mod coaches;
pub mod payments;
pub mod specializations;
pub mod testimonials;

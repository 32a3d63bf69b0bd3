pub mod faceted_query;
pub mod query_activity_periods;
pub mod query_clients;
pub mod query_coaches;
pub mod query_payments;
pub mod query_specializations;
pub mod query_testimonials;

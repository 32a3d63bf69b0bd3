pub mod activity_period;
pub mod client;
pub mod coach;
pub mod common;
pub mod filter;
pub mod health;
pub mod payment;
pub mod specialization;
pub mod testimonial;

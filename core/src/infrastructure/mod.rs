pub mod activity_period;
pub mod client;
pub mod coach;
pub mod collection;
pub mod db;
pub mod health;
pub mod payment;
pub mod specialization;
pub mod testimonial;

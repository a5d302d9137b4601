//! Business logic services

pub mod rating_service;

pub use rating_service::RatingService;

//! Pet Match - profile builder and recommendation proxy for the dog dating app
//!
//! The library holds the headless client core (the five-tab profile builder, its
//! validation, the screen router and the result carousel) plus the server pieces that
//! relay finished profiles to the external recommendation engine.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Carousel, ProfileBuilder, Screen, ScreenRouter, SubmitOutcome, TabUpdate, to_recommendation_request};
pub use models::{MatchResult, ProfileDraft, RecommendationRequest, RecommendationResponse, Tab};

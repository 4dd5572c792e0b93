// Service exports
pub mod gateway;
pub mod recommender;

pub use gateway::{HttpRecommendationGateway, RecommendationGateway, SubmitError};
pub use recommender::{RecommenderClient, RecommenderError, UpstreamReply};

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Flattened profile sent to the recommender
///
/// This is the exact wire contract of `POST /recommend`. Everything is a string except
/// `age_month`, `weight`, `lat` and `lon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 1, max = 180))]
    pub age_month: u16,
    #[validate(range(min = 0.1, max = 50.0))]
    pub weight: f64,
    pub color: String,
    pub personality: String,
    pub region: String,
    pub vaccinated: String,
    pub preference_age_range: String,
    pub preference_weight_range: String,
    pub preference_color: String,
    pub preference_personality: String,
    pub preference_region: String,
    pub preference_vaccine: String,
    pub lat: f64,
    pub lon: f64,
}

/// Credentials typed into the login screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

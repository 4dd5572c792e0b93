// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Certificate, FileUpload, Gender, GeoPoint, IdealType, LocalRef, LocationInfo, MatchResult,
    MateType, OwnerInfo, PetProfile, PhotoSet, ProfileDraft, RangePair, Tab,
};
pub use requests::{LoginForm, RecommendationRequest};
pub use responses::{ErrorResponse, HealthResponse, MapConfigResponse, RecommendationResponse};

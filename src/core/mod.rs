// Profile builder core exports
pub mod builder;
pub mod carousel;
pub mod options;
pub mod panels;
pub mod screens;
pub mod transform;

pub use builder::{is_form_complete, missing_fields, IncompleteForm, ProfileBuilder};
pub use carousel::Carousel;
pub use panels::{Advisory, TabUpdate};
pub use screens::{PendingSubmission, Screen, ScreenRouter, SubmitOutcome};
pub use transform::to_recommendation_request;

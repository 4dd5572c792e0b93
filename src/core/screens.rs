use tokio_util::sync::CancellationToken;
use validator::Validate;

use crate::core::builder::ProfileBuilder;
use crate::core::carousel::Carousel;
use crate::core::transform::to_recommendation_request;
use crate::models::{LoginForm, MatchResult, ProfileDraft, RecommendationRequest, RecommendationResponse};
use crate::services::{RecommendationGateway, SubmitError};

/// Message shown when a submission fails for any reason
pub const SUBMIT_ERROR_MESSAGE: &str = "Failed to save profile data";

/// Notice shown when the recommender found nobody
pub const NO_MATCHES_MESSAGE: &str = "No matches found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Profile,
    Preview,
}

/// How a submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Results are showing in the carousel
    Matched(usize),
    /// The recommender returned an empty list; the user stays on the profile screen
    NoMatches,
    /// Error message set, draft untouched
    Failed,
    Cancelled,
    /// The user left the profile screen before the reply arrived
    Discarded,
}

/// A submission that has left the builder and awaits the recommender
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub draft: ProfileDraft,
    pub request: RecommendationRequest,
    session: u64,
}

/// Top-level navigation and the profile submission flow
///
/// Transitions only happen on explicit user actions or when a submission completes.
#[derive(Debug)]
pub struct ScreenRouter {
    screen: Screen,
    login: LoginForm,
    builder: Option<ProfileBuilder>,
    session: u64,
    saved: ProfileDraft,
    is_submitting: bool,
    error: Option<String>,
    notice: Option<String>,
    carousel: Option<Carousel>,
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            builder: None,
            session: 0,
            saved: ProfileDraft::default(),
            is_submitting: false,
            error: None,
            notice: None,
            carousel: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn builder(&self) -> Option<&ProfileBuilder> {
        self.builder.as_ref()
    }

    pub fn builder_mut(&mut self) -> Option<&mut ProfileBuilder> {
        self.builder.as_mut()
    }

    /// Draft the next profile session starts from
    pub fn saved_draft(&self) -> &ProfileDraft {
        &self.saved
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
            && self.screen == Screen::Profile
            && self.builder.as_ref().is_some_and(ProfileBuilder::is_form_complete)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    pub fn next_result(&mut self) -> Option<&MatchResult> {
        self.carousel.as_mut().map(|c| &*c.next())
    }

    pub fn prev_result(&mut self) -> Option<&MatchResult> {
        self.carousel.as_mut().map(|c| &*c.prev())
    }

    /// Authentication is stubbed: any credentials open the profile builder
    pub fn sign_in(&mut self) {
        if self.screen != Screen::Login {
            return;
        }
        tracing::info!("Signing in {}", self.login.email);
        self.open_profile();
    }

    /// Close the builder, discarding unsaved edits
    pub fn close_profile(&mut self) {
        if self.screen != Screen::Profile {
            return;
        }
        self.builder = None;
        self.error = None;
        self.notice = None;
        self.screen = Screen::Login;
    }

    /// Go back from the results to edit the saved profile
    pub fn edit_profile(&mut self) {
        if self.screen != Screen::Preview {
            return;
        }
        self.open_profile();
    }

    fn open_profile(&mut self) {
        self.builder = Some(ProfileBuilder::new(&self.saved));
        self.session += 1;
        self.error = None;
        self.notice = None;
        self.screen = Screen::Profile;
    }

    /// Take a snapshot of the draft and mark the router as submitting
    pub fn begin_submission(&mut self) -> Result<PendingSubmission, SubmitError> {
        if self.is_submitting {
            return Err(SubmitError::AlreadySubmitting);
        }
        if self.screen != Screen::Profile {
            return Err(SubmitError::NotOnProfile);
        }
        let builder = self.builder.as_ref().ok_or(SubmitError::NotOnProfile)?;

        let draft = builder.complete()?;
        let request = to_recommendation_request(&draft);
        request.validate()?;

        self.is_submitting = true;
        self.error = None;
        self.notice = None;

        tracing::info!("Submitting profile for {}", request.name);

        Ok(PendingSubmission {
            draft,
            request,
            session: self.session,
        })
    }

    /// Apply the recommender's answer to a pending submission
    pub fn complete_submission(
        &mut self,
        pending: PendingSubmission,
        result: Result<RecommendationResponse, SubmitError>,
    ) -> SubmitOutcome {
        self.is_submitting = false;

        if self.screen != Screen::Profile || pending.session != self.session {
            tracing::info!("Dropping submission result, user left the profile screen");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                self.saved = pending.draft;
                let count = response.recommendations.len();

                match Carousel::new(response.recommendations) {
                    Some(carousel) => {
                        tracing::info!("Received {} recommendations", count);
                        self.carousel = Some(carousel);
                        self.builder = None;
                        self.screen = Screen::Preview;
                        SubmitOutcome::Matched(count)
                    }
                    None => {
                        tracing::info!("Recommender returned no matches");
                        self.notice = Some(NO_MATCHES_MESSAGE.to_string());
                        SubmitOutcome::NoMatches
                    }
                }
            }
            Err(SubmitError::Cancelled) => {
                tracing::info!("Submission cancelled");
                SubmitOutcome::Cancelled
            }
            Err(e) => {
                tracing::error!("Error saving profile: {}", e);
                self.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Submit the current draft and wait for the recommender
    ///
    /// Leaving the profile screen does not trip `cancel`; only the caller does.
    pub async fn submit<G>(&mut self, gateway: &G, cancel: &CancellationToken) -> Result<SubmitOutcome, SubmitError>
    where
        G: RecommendationGateway + ?Sized,
    {
        let pending = self.begin_submission()?;

        let result = tokio::select! {
            _ = cancel.cancelled() => Err(SubmitError::Cancelled),
            result = gateway.recommend(&pending.request) => result,
        };

        Ok(self.complete_submission(pending, result))
    }
}

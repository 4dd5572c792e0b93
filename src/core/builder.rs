use thiserror::Error;

use crate::core::panels::{self, Advisory, TabUpdate};
use crate::models::{ProfileDraft, Tab};

/// Returned by [`ProfileBuilder::complete`] when required fields are missing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Profile is incomplete, missing: {}", .missing.join(", "))]
pub struct IncompleteForm {
    pub missing: Vec<&'static str>,
}

/// Owns the draft for one profile-builder session
///
/// Tabs can be visited in any order. Panels hand back [`TabUpdate`]s which replace one
/// slice of the draft at a time.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    draft: ProfileDraft,
}

impl ProfileBuilder {
    /// Start a session seeded from a previously saved draft
    pub fn new(seed: &ProfileDraft) -> Self {
        Self { draft: seed.clone() }
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn active_tab(&self) -> Tab {
        self.draft.active_tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.draft.active_tab = tab;
    }

    pub fn apply(&mut self, update: TabUpdate) {
        match update {
            TabUpdate::Photos(photos) => self.draft.photos = photos,
            TabUpdate::Profile(profile) => self.draft.pet_profile = profile,
            TabUpdate::Certificate(certificate) => self.draft.vaccination_certificate = certificate,
            TabUpdate::IdealType(ideal) => self.draft.ideal_type = ideal,
            TabUpdate::Owner(owner) => self.draft.owner = owner,
            TabUpdate::Location(location) => self.draft.location = location,
        }
    }

    /// Apply an update if the panel produced one
    pub fn apply_opt(&mut self, update: Option<TabUpdate>) -> bool {
        match update {
            Some(update) => {
                self.apply(update);
                true
            }
            None => false,
        }
    }

    /// Required fields that are still missing, in tab order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_fields(&self.draft)
    }

    /// Whether the submit control is enabled
    pub fn is_form_complete(&self) -> bool {
        is_form_complete(&self.draft)
    }

    /// Inline advisories for the active tab
    pub fn advisories(&self) -> Vec<Advisory> {
        advisories_for(&self.draft, self.draft.active_tab)
    }

    /// Hand back a snapshot of the draft for submission
    pub fn complete(&self) -> Result<ProfileDraft, IncompleteForm> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteForm { missing });
        }
        Ok(self.draft.clone())
    }
}

/// Required fields of `draft` that are unset
///
/// Ideal type, location and mate type only raise advisories; they never block submission.
pub fn missing_fields(draft: &ProfileDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if draft.photos.images.is_empty() {
        missing.push("images");
    }
    if draft.photos.representative_index.is_none() {
        missing.push("representativeImage");
    }

    let pet = &draft.pet_profile;
    if pet.breed.is_none() {
        missing.push("breed");
    }
    if pet.gender.is_none() {
        missing.push("gender");
    }
    if pet.name.trim().is_empty() {
        missing.push("name");
    }
    if pet.color.is_none() {
        missing.push("color");
    }
    if pet.personality.is_empty() {
        missing.push("personality");
    }

    let owner = &draft.owner;
    if owner.nickname.trim().is_empty() {
        missing.push("ownerNickname");
    }
    if owner.gender.is_none() {
        missing.push("ownerGender");
    }
    if owner.age_group.is_none() {
        missing.push("ownerAge");
    }
    if owner.region.is_none() {
        missing.push("ownerRegion");
    }
    if owner.appeal.trim().is_empty() {
        missing.push("ownerAppeal");
    }

    missing
}

pub fn is_form_complete(draft: &ProfileDraft) -> bool {
    missing_fields(draft).is_empty()
}

pub fn advisories_for(draft: &ProfileDraft, tab: Tab) -> Vec<Advisory> {
    match tab {
        Tab::Photos => panels::photo::advisories(&draft.photos),
        Tab::Profile => panels::profile::advisories(&draft.pet_profile),
        Tab::IdealType => panels::ideal_type::advisories(&draft.ideal_type),
        Tab::Owner => panels::owner::advisories(&draft.owner),
        Tab::Location => panels::location::advisories(&draft.location),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, LocalRef, OwnerInfo, PetProfile, PhotoSet};

    fn minimal_complete_draft() -> ProfileDraft {
        ProfileDraft {
            photos: PhotoSet {
                images: vec![LocalRef("local:1".to_string())],
                representative_index: Some(0),
            },
            pet_profile: PetProfile {
                breed: Some("Poodle".to_string()),
                gender: Some(Gender::Male),
                name: "Mong".to_string(),
                color: Some("brown".to_string()),
                personality: vec!["active".to_string()],
                ..PetProfile::default()
            },
            owner: OwnerInfo {
                nickname: "jay".to_string(),
                gender: Some(Gender::Female),
                age_group: Some("30s".to_string()),
                region: Some("Seoul".to_string()),
                appeal: "We walk every morning".to_string(),
            },
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_minimal_draft_is_complete() {
        let builder = ProfileBuilder::new(&minimal_complete_draft());
        assert!(builder.is_form_complete());
        assert!(builder.complete().is_ok());
    }

    #[test]
    fn test_no_images_is_never_complete() {
        let mut draft = minimal_complete_draft();
        draft.photos = PhotoSet::default();

        let builder = ProfileBuilder::new(&draft);
        assert!(!builder.is_form_complete());
        let err = builder.complete().unwrap_err();
        assert_eq!(err.missing, vec!["images", "representativeImage"]);
    }

    #[test]
    fn test_blank_name_and_appeal_block_completion() {
        let mut draft = minimal_complete_draft();
        draft.pet_profile.name = "  ".to_string();
        draft.owner.appeal = "\n".to_string();

        assert_eq!(missing_fields(&draft), vec!["name", "ownerAppeal"]);
    }

    #[test]
    fn test_advisory_only_sections_do_not_block() {
        let draft = minimal_complete_draft();
        assert!(draft.pet_profile.mate_type.is_empty());
        assert!(draft.location.selected_location.is_none());
        assert!(!advisories_for(&draft, Tab::Location).is_empty());
        assert!(!advisories_for(&draft, Tab::IdealType).is_empty());
        assert!(is_form_complete(&draft));

        let warned: Vec<_> = [Tab::IdealType, Tab::Location]
            .into_iter()
            .flat_map(|tab| advisories_for(&ProfileDraft::default(), tab))
            .map(|a| a.field)
            .collect();
        for field in ["preferredGender", "preferredColor", "nearbyRange"] {
            assert!(warned.contains(&field));
            assert!(!missing_fields(&ProfileDraft::default()).contains(&field));
        }
    }

    #[test]
    fn test_switch_tab_and_apply() {
        let mut builder = ProfileBuilder::new(&ProfileDraft::default());
        builder.switch_tab(Tab::Owner);
        assert_eq!(builder.active_tab(), Tab::Owner);

        let update = panels::owner::set_nickname(&builder.draft().owner, "jay");
        builder.apply(update);
        assert_eq!(builder.draft().owner.nickname, "jay");
        let fields: Vec<_> = builder.advisories().iter().map(|a| a.field).collect();
        assert!(!fields.contains(&"nickname"));
        assert!(fields.contains(&"appeal"));
    }

    #[test]
    fn test_seed_is_not_mutated() {
        let seed = ProfileDraft::default();
        let mut builder = ProfileBuilder::new(&seed);
        builder.switch_tab(Tab::Location);
        assert_eq!(seed.active_tab, Tab::Photos);
    }
}

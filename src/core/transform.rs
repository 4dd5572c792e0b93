use crate::models::{ProfileDraft, RecommendationRequest};

/// Flatten a draft into the recommender's request shape
///
/// Images, mate types, owner nickname and introduction are not part of the recommender
/// contract and are dropped. The preferred region follows the owner's region and the
/// vaccine preference is always "yes".
pub fn to_recommendation_request(draft: &ProfileDraft) -> RecommendationRequest {
    let pet = &draft.pet_profile;
    let ideal = &draft.ideal_type;
    let region = draft.owner.region.clone().unwrap_or_default();

    RecommendationRequest {
        name: pet.name.clone(),
        age_month: pet.age_months,
        weight: pet.weight_kg,
        color: pet.color.clone().unwrap_or_default(),
        personality: pet.personality.join(","),
        region: region.clone(),
        vaccinated: yes_no(draft.vaccination_certificate.is_some()).to_string(),
        preference_age_range: format!("{}-{}", ideal.age_range.low, ideal.age_range.high),
        preference_weight_range: format!("{}-{}", ideal.weight_range.low, ideal.weight_range.high),
        preference_color: ideal.preferred_color.clone().unwrap_or_default(),
        preference_personality: ideal.preferred_personality.join(","),
        preference_region: region,
        preference_vaccine: yes_no(true).to_string(),
        lat: draft.location.latitude,
        lon: draft.location.longitude,
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

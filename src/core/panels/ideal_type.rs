use crate::core::options::{self, PREFERRED_AGE_MONTHS, WEIGHT_KG};
use crate::core::panels::{snap_weight, toggle, Advisory, TabUpdate};
use crate::models::{Gender, IdealType, MateType, RangePair};

pub fn set_gender(ideal: &IdealType, gender: Gender) -> TabUpdate {
    TabUpdate::IdealType(IdealType {
        preferred_gender: Some(gender),
        ..ideal.clone()
    })
}

pub fn set_color(ideal: &IdealType, color: &str) -> Option<TabUpdate> {
    if !options::is_known_color(color) {
        return None;
    }
    Some(TabUpdate::IdealType(IdealType {
        preferred_color: Some(color.to_string()),
        ..ideal.clone()
    }))
}

/// Move both handles of the age slider; the pair never inverts
pub fn set_age_range(ideal: &IdealType, low: u16, high: u16) -> TabUpdate {
    let low = low.clamp(PREFERRED_AGE_MONTHS.min, PREFERRED_AGE_MONTHS.max);
    let high = high.clamp(PREFERRED_AGE_MONTHS.min, PREFERRED_AGE_MONTHS.max);

    TabUpdate::IdealType(IdealType {
        age_range: RangePair::new(low.min(high), low.max(high)),
        ..ideal.clone()
    })
}

/// Move both handles of the weight slider; the pair never inverts
pub fn set_weight_range(ideal: &IdealType, low: f64, high: f64) -> Option<TabUpdate> {
    if !low.is_finite() || !high.is_finite() {
        return None;
    }
    let low = snap_weight(low.clamp(WEIGHT_KG.min, WEIGHT_KG.max));
    let high = snap_weight(high.clamp(WEIGHT_KG.min, WEIGHT_KG.max));

    Some(TabUpdate::IdealType(IdealType {
        weight_range: RangePair::new(low.min(high), low.max(high)),
        ..ideal.clone()
    }))
}

pub fn toggle_personality(ideal: &IdealType, trait_name: &str) -> Option<TabUpdate> {
    if !options::is_known_trait(trait_name) {
        return None;
    }
    Some(TabUpdate::IdealType(IdealType {
        preferred_personality: toggle(&ideal.preferred_personality, &trait_name.to_string()),
        ..ideal.clone()
    }))
}

pub fn toggle_mate_type(ideal: &IdealType, mate_type: MateType) -> TabUpdate {
    TabUpdate::IdealType(IdealType {
        preferred_mate_type: toggle(&ideal.preferred_mate_type, &mate_type),
        ..ideal.clone()
    })
}

pub fn advisories(ideal: &IdealType) -> Vec<Advisory> {
    let mut out = Vec::new();
    if ideal.preferred_gender.is_none() {
        out.push(Advisory::new("preferredGender", "Select a preferred gender."));
    }
    if ideal.preferred_color.is_none() {
        out.push(Advisory::new("preferredColor", "Select a preferred color."));
    }
    if ideal.preferred_personality.is_empty() {
        out.push(Advisory::new("preferredPersonality", "Select at least one personality."));
    }
    if ideal.preferred_mate_type.is_empty() {
        out.push(Advisory::new("preferredMateType", "Select at least one purpose."));
    }
    out
}

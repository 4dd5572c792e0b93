use crate::core::options;
use crate::core::panels::{Advisory, TabUpdate};
use crate::models::{Gender, OwnerInfo};

pub fn set_nickname(owner: &OwnerInfo, nickname: &str) -> TabUpdate {
    TabUpdate::Owner(OwnerInfo {
        nickname: nickname.to_string(),
        ..owner.clone()
    })
}

pub fn set_gender(owner: &OwnerInfo, gender: Gender) -> TabUpdate {
    TabUpdate::Owner(OwnerInfo {
        gender: Some(gender),
        ..owner.clone()
    })
}

pub fn set_age_group(owner: &OwnerInfo, age_group: &str) -> Option<TabUpdate> {
    if !options::is_known_age_group(age_group) {
        return None;
    }
    Some(TabUpdate::Owner(OwnerInfo {
        age_group: Some(age_group.to_string()),
        ..owner.clone()
    }))
}

pub fn set_region(owner: &OwnerInfo, region: &str) -> Option<TabUpdate> {
    if !options::is_known_region(region) {
        return None;
    }
    Some(TabUpdate::Owner(OwnerInfo {
        region: Some(region.to_string()),
        ..owner.clone()
    }))
}

pub fn set_appeal(owner: &OwnerInfo, appeal: &str) -> TabUpdate {
    TabUpdate::Owner(OwnerInfo {
        appeal: appeal.to_string(),
        ..owner.clone()
    })
}

pub fn advisories(owner: &OwnerInfo) -> Vec<Advisory> {
    let mut out = Vec::new();
    if owner.nickname.trim().is_empty() {
        out.push(Advisory::new("nickname", "Enter a nickname."));
    }
    if owner.gender.is_none() {
        out.push(Advisory::new("ownerGender", "Select your gender."));
    }
    if owner.age_group.is_none() {
        out.push(Advisory::new("ownerAge", "Select your age group."));
    }
    if owner.region.is_none() {
        out.push(Advisory::new("ownerRegion", "Select your region."));
    }
    if owner.appeal.trim().is_empty() {
        out.push(Advisory::new("appeal", "Write a short introduction."));
    }
    out
}

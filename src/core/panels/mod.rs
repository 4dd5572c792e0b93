//! Tab panels of the profile builder
//!
//! Every panel is a set of pure functions from (its slice of the draft, an edit) to a
//! replacement slice wrapped in a [`TabUpdate`]. Panels never hold draft state; the only
//! state they keep is ephemeral widget state such as the certificate picker or the map
//! handles.

pub mod ideal_type;
pub mod location;
pub mod owner;
pub mod photo;
pub mod profile;

use crate::models::{Certificate, IdealType, LocationInfo, OwnerInfo, PetProfile, PhotoSet};

/// Whole-slice replacement sent from a panel to the builder
#[derive(Debug, Clone, PartialEq)]
pub enum TabUpdate {
    Photos(PhotoSet),
    Profile(PetProfile),
    Certificate(Option<Certificate>),
    IdealType(IdealType),
    Owner(OwnerInfo),
    Location(LocationInfo),
}

/// Inline warning rendered next to a field. Advisories never block anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub field: &'static str,
    pub message: &'static str,
}

impl Advisory {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Flip membership of `value`, appending when absent
pub(crate) fn toggle<T: PartialEq + Clone>(items: &[T], value: &T) -> Vec<T> {
    if items.contains(value) {
        items.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = items.to_vec();
        next.push(value.clone());
        next
    }
}

/// Snap a weight to the slider's 0.1 kg grid
pub(crate) fn snap_weight(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

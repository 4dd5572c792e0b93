use thiserror::Error;

use crate::core::options::{self, PET_AGE_MONTHS, WEIGHT_KG};
use crate::core::panels::{snap_weight, toggle, Advisory, TabUpdate};
use crate::models::{Certificate, FileUpload, Gender, LocalRef, MateType, PetProfile};

/// Content types accepted for a vaccination certificate
pub const CERTIFICATE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "application/pdf"];

/// Largest accepted certificate, 10 MiB
pub const MAX_CERTIFICATE_BYTES: u64 = 10 * 1024 * 1024;

/// Reasons a certificate upload is turned away
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Only image files (JPG, PNG) or PDF files can be uploaded.")]
    UnsupportedType(String),

    #[error("The file must be 10MB or smaller.")]
    TooLarge(u64),
}

pub fn set_breed(profile: &PetProfile, breed: &str) -> Option<TabUpdate> {
    if !options::is_known_breed(breed) {
        return None;
    }
    Some(TabUpdate::Profile(PetProfile {
        breed: Some(breed.to_string()),
        ..profile.clone()
    }))
}

pub fn set_gender(profile: &PetProfile, gender: Gender) -> TabUpdate {
    TabUpdate::Profile(PetProfile {
        gender: Some(gender),
        ..profile.clone()
    })
}

pub fn set_name(profile: &PetProfile, name: &str) -> TabUpdate {
    TabUpdate::Profile(PetProfile {
        name: name.to_string(),
        ..profile.clone()
    })
}

pub fn set_age(profile: &PetProfile, months: u16) -> TabUpdate {
    TabUpdate::Profile(PetProfile {
        age_months: months.clamp(PET_AGE_MONTHS.min, PET_AGE_MONTHS.max),
        ..profile.clone()
    })
}

pub fn set_weight(profile: &PetProfile, kg: f64) -> Option<TabUpdate> {
    if !kg.is_finite() {
        return None;
    }
    Some(TabUpdate::Profile(PetProfile {
        weight_kg: snap_weight(kg.clamp(WEIGHT_KG.min, WEIGHT_KG.max)),
        ..profile.clone()
    }))
}

pub fn set_color(profile: &PetProfile, color: &str) -> Option<TabUpdate> {
    if !options::is_known_color(color) {
        return None;
    }
    Some(TabUpdate::Profile(PetProfile {
        color: Some(color.to_string()),
        ..profile.clone()
    }))
}

pub fn toggle_personality(profile: &PetProfile, trait_name: &str) -> Option<TabUpdate> {
    if !options::is_known_trait(trait_name) {
        return None;
    }
    Some(TabUpdate::Profile(PetProfile {
        personality: toggle(&profile.personality, &trait_name.to_string()),
        ..profile.clone()
    }))
}

pub fn toggle_mate_type(profile: &PetProfile, mate_type: MateType) -> TabUpdate {
    TabUpdate::Profile(PetProfile {
        mate_type: toggle(&profile.mate_type, &mate_type),
        ..profile.clone()
    })
}

pub fn advisories(profile: &PetProfile) -> Vec<Advisory> {
    let mut out = Vec::new();
    if profile.breed.is_none() {
        out.push(Advisory::new("breed", "Select a breed."));
    }
    if profile.name.trim().is_empty() {
        out.push(Advisory::new("name", "Enter a name."));
    }
    if profile.mate_type.is_empty() {
        out.push(Advisory::new("mateType", "Select at least one purpose."));
    }
    out
}

/// Hidden file input backing the certificate upload area
#[derive(Debug, Default)]
pub struct CertificatePicker {
    value: Option<String>,
}

impl CertificatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// File name currently held by the input, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Validate a picked file and turn it into a certificate update
    ///
    /// An accepted file replaces any previous certificate and clears the input so the same
    /// file can be picked again after removal. Rejected files leave the draft alone.
    pub fn pick(&mut self, upload: &FileUpload) -> Result<TabUpdate, UploadError> {
        self.value = Some(upload.file_name.clone());

        if !CERTIFICATE_TYPES.contains(&upload.content_type.as_str()) {
            tracing::info!("Rejected certificate {} with type {}", upload.file_name, upload.content_type);
            return Err(UploadError::UnsupportedType(upload.content_type.clone()));
        }

        if upload.size_bytes > MAX_CERTIFICATE_BYTES {
            tracing::info!("Rejected certificate {} of {} bytes", upload.file_name, upload.size_bytes);
            return Err(UploadError::TooLarge(upload.size_bytes));
        }

        let certificate = Certificate {
            reference: LocalRef::mint(),
            file_name: upload.file_name.clone(),
        };
        self.value = None;

        Ok(TabUpdate::Certificate(Some(certificate)))
    }
}

pub fn remove_certificate() -> TabUpdate {
    TabUpdate::Certificate(None)
}

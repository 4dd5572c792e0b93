use serde::{Deserialize, Serialize};

/// Tabs of the profile builder, in tab-strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Photos,
    Profile,
    IdealType,
    Owner,
    Location,
}

impl Tab {
    /// Label shown in the tab strip
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Photos => "Photos",
            Tab::Profile => "Profile",
            Tab::IdealType => "Ideal Type",
            Tab::Owner => "Owner",
            Tab::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

/// What kind of companion the pet is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MateType {
    Walk,
    Soul,
}

/// Transient reference to a locally picked file (never a durable URL)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalRef(pub String);

impl LocalRef {
    pub fn mint() -> Self {
        Self(format!("local:{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A file handed over by the host's file picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size_bytes,
        }
    }
}

/// Uploaded photos plus the index of the representative one
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSet {
    pub images: Vec<LocalRef>,
    pub representative_index: Option<usize>,
}

/// Accepted vaccination certificate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub reference: LocalRef,
    pub file_name: String,
}

/// The pet's own attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetProfile {
    pub breed: Option<String>,
    pub gender: Option<Gender>,
    pub name: String,
    pub age_months: u16,
    pub weight_kg: f64,
    pub color: Option<String>,
    pub personality: Vec<String>,
    pub mate_type: Vec<MateType>,
}

impl Default for PetProfile {
    fn default() -> Self {
        Self {
            breed: None,
            gender: None,
            name: String::new(),
            age_months: 1,
            weight_kg: 0.1,
            color: None,
            personality: Vec::new(),
            mate_type: Vec::new(),
        }
    }
}

/// Inclusive `[low, high]` pair kept in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePair<T> {
    pub low: T,
    pub high: T,
}

impl<T> RangePair<T> {
    pub fn new(low: T, high: T) -> Self {
        Self { low, high }
    }
}

/// Preferences for a match candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdealType {
    pub preferred_gender: Option<Gender>,
    pub age_range: RangePair<u16>,
    pub weight_range: RangePair<f64>,
    pub preferred_color: Option<String>,
    pub preferred_personality: Vec<String>,
    pub preferred_mate_type: Vec<MateType>,
}

impl Default for IdealType {
    fn default() -> Self {
        Self {
            preferred_gender: None,
            age_range: RangePair::new(1, 180),
            weight_range: RangePair::new(0.1, 50.0),
            preferred_color: None,
            preferred_personality: Vec::new(),
            preferred_mate_type: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerInfo {
    pub nickname: String,
    pub gender: Option<Gender>,
    pub age_group: Option<String>,
    pub region: Option<String>,
    pub appeal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub nearby_range: Option<String>,
    pub selected_location: Option<GeoPoint>,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f64,
    pub is_map_loaded: bool,
    pub zoom: u8,
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            nearby_range: None,
            selected_location: None,
            latitude: 0.0,
            longitude: 0.0,
            accuracy: 0.0,
            is_map_loaded: false,
            zoom: 15,
        }
    }
}

/// The in-progress profile edited across the five tabs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub active_tab: Tab,
    pub photos: PhotoSet,
    pub vaccination_certificate: Option<Certificate>,
    pub pet_profile: PetProfile,
    pub ideal_type: IdealType,
    pub owner: OwnerInfo,
    pub location: LocationInfo,
}

/// One candidate returned by the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    #[serde(default)]
    pub image: String,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub score: f64,
}

impl MatchResult {
    /// Path the card renders its photo from
    pub fn image_src(&self) -> String {
        if self.image.is_empty() {
            "/placeholder.svg".to_string()
        } else {
            format!("/images/{}", self.image)
        }
    }
}

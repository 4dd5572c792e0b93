use crate::models::{MateType, Tab};

/// Tabs in the order the strip renders them
pub const TABS: [Tab; 5] = [Tab::Photos, Tab::Profile, Tab::IdealType, Tab::Owner, Tab::Location];

pub const BREEDS: &[&str] = &[
    "Maltese",
    "Poodle",
    "Pomeranian",
    "Shih Tzu",
    "Bichon Frise",
    "Chihuahua",
    "Jindo",
    "Welsh Corgi",
    "Golden Retriever",
    "Mixed",
];

/// A coat color and the swatch used to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub swatch: &'static str,
}

pub const COLOR_OPTIONS: &[ColorOption] = &[
    ColorOption { name: "white", swatch: "#FFFFFF" },
    ColorOption { name: "black", swatch: "#000000" },
    ColorOption { name: "brown", swatch: "#8B4513" },
    ColorOption { name: "cream", swatch: "#FFFDD0" },
    ColorOption { name: "gray", swatch: "#808080" },
    ColorOption { name: "gold", swatch: "#D4AF37" },
];

pub const PERSONALITY_TRAITS: &[&str] = &[
    "active",
    "calm",
    "friendly",
    "shy",
    "playful",
    "independent",
    "affectionate",
    "curious",
    "gentle",
];

pub const REGIONS: &[&str] = &[
    "Seoul",
    "Gyeonggi",
    "Incheon",
    "Gangwon",
    "Chungcheong",
    "Daejeon",
    "Gyeongsang",
    "Daegu",
    "Busan",
    "Ulsan",
    "Jeolla",
    "Gwangju",
    "Jeju",
];

pub const AGE_GROUPS: &[&str] = &["10s", "20s", "30s", "40s", "50s", "60s+"];

pub const NEARBY_RANGES: &[&str] = &["1km", "3km", "5km", "10km", "20km"];

pub const MATE_TYPES: [MateType; 2] = [MateType::Walk, MateType::Soul];

/// Inclusive slider bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds<T> {
    pub min: T,
    pub max: T,
    pub step: T,
}

pub const PET_AGE_MONTHS: SliderBounds<u16> = SliderBounds { min: 1, max: 120, step: 1 };
pub const PREFERRED_AGE_MONTHS: SliderBounds<u16> = SliderBounds { min: 1, max: 180, step: 1 };
pub const WEIGHT_KG: SliderBounds<f64> = SliderBounds { min: 0.1, max: 50.0, step: 0.1 };

pub fn is_known_breed(value: &str) -> bool {
    BREEDS.contains(&value)
}

pub fn is_known_color(value: &str) -> bool {
    COLOR_OPTIONS.iter().any(|c| c.name == value)
}

pub fn is_known_trait(value: &str) -> bool {
    PERSONALITY_TRAITS.contains(&value)
}

pub fn is_known_region(value: &str) -> bool {
    REGIONS.contains(&value)
}

pub fn is_known_age_group(value: &str) -> bool {
    AGE_GROUPS.contains(&value)
}

pub fn is_known_nearby_range(value: &str) -> bool {
    NEARBY_RANGES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_strip_order() {
        assert_eq!(TABS.first(), Some(&Tab::Photos));
        assert_eq!(TABS.last(), Some(&Tab::Location));
    }

    #[test]
    fn test_lookups() {
        assert!(is_known_breed("Poodle"));
        assert!(!is_known_breed("Dragon"));
        assert!(is_known_color("brown"));
        assert!(is_known_region("Seoul"));
        assert!(!is_known_nearby_range("100km"));
    }
}

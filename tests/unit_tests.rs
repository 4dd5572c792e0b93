// Unit tests for Pet Match

use pet_match::core::builder::{is_form_complete, ProfileBuilder};
use pet_match::core::carousel::Carousel;
use pet_match::core::panels::photo::{add_images, remove_image, select_representative, MAX_IMAGES};
use pet_match::core::panels::profile::{CertificatePicker, MAX_CERTIFICATE_BYTES};
use pet_match::core::panels::TabUpdate;
use pet_match::core::transform::to_recommendation_request;
use pet_match::models::{
    FileUpload, Gender, LocalRef, MatchResult, OwnerInfo, PetProfile, PhotoSet, ProfileDraft,
};

fn assert_representative_invariant(set: &PhotoSet) {
    match set.representative_index {
        None => assert!(set.images.is_empty(), "unset representative with {} images", set.images.len()),
        Some(index) => assert!(index < set.images.len(), "index {} out of {}", index, set.images.len()),
    }
    assert!(set.images.len() <= MAX_IMAGES);
}

fn photo_set(update: Option<TabUpdate>, fallback: &PhotoSet) -> PhotoSet {
    match update {
        Some(TabUpdate::Photos(set)) => set,
        Some(other) => panic!("unexpected update {:?}", other),
        None => fallback.clone(),
    }
}

#[test]
fn test_representative_invariant_over_operation_sequences() {
    // Small deterministic LCG so every run walks the same sequences
    let mut seed: u64 = 0x5eed;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as usize
    };

    for _ in 0..200 {
        let mut set = PhotoSet::default();
        for _ in 0..40 {
            let op = next() % 3;
            let update = match op {
                0 => {
                    let uploads: Vec<FileUpload> = (0..(next() % 4))
                        .map(|i| FileUpload::new(format!("{}.jpg", i), "image/jpeg", 1000))
                        .collect();
                    add_images(&set, &uploads)
                }
                1 => remove_image(&set, next() % 6),
                _ => select_representative(&set, next() % 6),
            };
            set = photo_set(update, &set);
            assert_representative_invariant(&set);
        }
    }
}

#[test]
fn test_removing_tracks_the_same_logical_image() {
    let set = PhotoSet {
        images: (0..5).map(|i| LocalRef(format!("local:{}", i))).collect(),
        representative_index: Some(4),
    };

    let set = photo_set(remove_image(&set, 0), &set);
    let set = photo_set(remove_image(&set, 1), &set);

    let representative = set.representative_index.unwrap();
    assert_eq!(set.images[representative], LocalRef("local:4".to_string()));
}

#[test]
fn test_rejected_certificates_never_reach_the_draft() {
    let mut builder = ProfileBuilder::new(&ProfileDraft::default());
    let mut picker = CertificatePicker::new();

    let rejected = [
        FileUpload::new("shot.gif", "image/gif", 100),
        FileUpload::new("doc.txt", "text/plain", 100),
        FileUpload::new("huge.pdf", "application/pdf", MAX_CERTIFICATE_BYTES + 1),
        FileUpload::new("huge.jpg", "image/jpeg", u64::MAX),
    ];

    for upload in &rejected {
        if let Ok(update) = picker.pick(upload) {
            builder.apply(update);
        }
        assert!(builder.draft().vaccination_certificate.is_none());
    }

    let accepted = picker.pick(&FileUpload::new("ok.jpg", "image/jpg", 500)).unwrap();
    builder.apply(accepted);
    assert_eq!(
        builder.draft().vaccination_certificate.as_ref().map(|c| c.file_name.as_str()),
        Some("ok.jpg")
    );
}

#[test]
fn test_accepted_certificate_replaces_previous() {
    let mut builder = ProfileBuilder::new(&ProfileDraft::default());
    let mut picker = CertificatePicker::new();

    builder.apply(picker.pick(&FileUpload::new("first.pdf", "application/pdf", 10)).unwrap());
    builder.apply(picker.pick(&FileUpload::new("second.png", "image/png", 10)).unwrap());

    let cert = builder.draft().vaccination_certificate.as_ref().unwrap();
    assert_eq!(cert.file_name, "second.png");
}

fn complete_draft() -> ProfileDraft {
    ProfileDraft {
        photos: PhotoSet {
            images: vec![LocalRef::mint()],
            representative_index: Some(0),
        },
        pet_profile: PetProfile {
            breed: Some("Jindo".to_string()),
            gender: Some(Gender::Female),
            name: "Bori".to_string(),
            color: Some("cream".to_string()),
            personality: vec!["friendly".to_string()],
            ..PetProfile::default()
        },
        owner: OwnerInfo {
            nickname: "min".to_string(),
            gender: Some(Gender::Male),
            age_group: Some("40s".to_string()),
            region: Some("Jeju".to_string()),
            appeal: "Beach walks".to_string(),
        },
        ..ProfileDraft::default()
    }
}

#[test]
fn test_form_incomplete_without_images_regardless_of_rest() {
    let mut draft = complete_draft();
    assert!(is_form_complete(&draft));

    draft.photos = PhotoSet::default();
    assert!(!is_form_complete(&draft));
}

#[test]
fn test_each_required_field_gates_completion() {
    let breakers: [fn(&mut ProfileDraft); 11] = [
        |d| d.photos.representative_index = None,
        |d| d.pet_profile.breed = None,
        |d| d.pet_profile.gender = None,
        |d| d.pet_profile.name = "   ".to_string(),
        |d| d.pet_profile.color = None,
        |d| d.pet_profile.personality.clear(),
        |d| d.owner.nickname.clear(),
        |d| d.owner.gender = None,
        |d| d.owner.age_group = None,
        |d| d.owner.region = None,
        |d| d.owner.appeal = " ".to_string(),
    ];

    for breaker in breakers {
        let mut draft = complete_draft();
        breaker(&mut draft);
        assert!(!is_form_complete(&draft));
    }
}

#[test]
fn test_carousel_next_and_prev_are_inverse() {
    let results: Vec<MatchResult> = (0..3)
        .map(|i| MatchResult {
            id: i.to_string(),
            image: String::new(),
            lat: 0.0,
            lon: 0.0,
            name: format!("Dog {}", i),
            score: 0.5,
        })
        .collect();

    let mut carousel = Carousel::new(results).unwrap();
    carousel.prev();
    assert_eq!(carousel.index(), 2);
    carousel.next();
    assert_eq!(carousel.index(), 0);

    for _ in 0..7 {
        carousel.next();
    }
    for _ in 0..7 {
        carousel.prev();
    }
    assert_eq!(carousel.index(), 0);
}

#[test]
fn test_recommendation_request_for_mong() {
    let draft = ProfileDraft {
        pet_profile: PetProfile {
            name: "Mong".to_string(),
            age_months: 7,
            weight_kg: 3.2,
            color: Some("brown".to_string()),
            personality: vec!["active".to_string()],
            ..PetProfile::default()
        },
        owner: OwnerInfo {
            region: Some("Seoul".to_string()),
            ..OwnerInfo::default()
        },
        ..ProfileDraft::default()
    };

    let request = to_recommendation_request(&draft);
    assert_eq!(request.age_month, 7);
    assert_eq!(request.weight, 3.2);
    assert_eq!(request.region, "Seoul");
    assert_eq!(request.preference_region, "Seoul");
}

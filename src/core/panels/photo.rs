use crate::core::panels::{Advisory, TabUpdate};
use crate::models::{FileUpload, LocalRef, PhotoSet};

/// Maximum number of photos on a profile
pub const MAX_IMAGES: usize = 5;

/// Append picked images, keeping at most [`MAX_IMAGES`] in upload order
///
/// Non-image files are skipped, mirroring the picker's `image/*` filter. The first image
/// becomes representative when none was chosen yet.
pub fn add_images(set: &PhotoSet, uploads: &[FileUpload]) -> Option<TabUpdate> {
    let fresh: Vec<LocalRef> = uploads
        .iter()
        .filter(|upload| upload.content_type.starts_with("image/"))
        .map(|_| LocalRef::mint())
        .collect();

    if fresh.is_empty() {
        return None;
    }

    let mut images = set.images.clone();
    images.extend(fresh);
    images.truncate(MAX_IMAGES);

    let representative_index = set.representative_index.or(Some(0));

    tracing::debug!("Photo set now holds {} images", images.len());

    Some(TabUpdate::Photos(PhotoSet {
        images,
        representative_index,
    }))
}

/// Remove the image at `index`, keeping the representative pointing at the same photo
pub fn remove_image(set: &PhotoSet, index: usize) -> Option<TabUpdate> {
    if index >= set.images.len() {
        return None;
    }

    let mut images = set.images.clone();
    images.remove(index);

    let representative_index = match set.representative_index {
        Some(current) if current == index => {
            if images.is_empty() {
                None
            } else {
                Some(0)
            }
        }
        Some(current) if current > index => Some(current - 1),
        other => other,
    };

    Some(TabUpdate::Photos(PhotoSet {
        images,
        representative_index,
    }))
}

/// Mark the image at `index` as representative
pub fn select_representative(set: &PhotoSet, index: usize) -> Option<TabUpdate> {
    if index >= set.images.len() {
        return None;
    }

    Some(TabUpdate::Photos(PhotoSet {
        images: set.images.clone(),
        representative_index: Some(index),
    }))
}

/// Whether the upload button is still shown
pub fn can_add_more(set: &PhotoSet) -> bool {
    set.images.len() < MAX_IMAGES
}

pub fn advisories(set: &PhotoSet) -> Vec<Advisory> {
    let mut out = Vec::new();
    if set.images.is_empty() {
        out.push(Advisory::new("images", "Register at least one photo."));
    } else if set.representative_index.is_none() {
        out.push(Advisory::new("representativeImage", "Select a representative photo."));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> FileUpload {
        FileUpload::new(name, "image/jpeg", 1024)
    }

    fn unwrap_photos(update: Option<TabUpdate>) -> PhotoSet {
        match update {
            Some(TabUpdate::Photos(set)) => set,
            other => panic!("expected photo update, got {:?}", other),
        }
    }

    fn set_with(count: usize, representative: Option<usize>) -> PhotoSet {
        PhotoSet {
            images: (0..count).map(|i| LocalRef(format!("local:{}", i))).collect(),
            representative_index: representative,
        }
    }

    #[test]
    fn test_first_upload_selects_representative() {
        let set = unwrap_photos(add_images(&PhotoSet::default(), &[jpeg("a.jpg"), jpeg("b.jpg")]));
        assert_eq!(set.images.len(), 2);
        assert_eq!(set.representative_index, Some(0));
    }

    #[test]
    fn test_uploads_truncate_to_five_preserving_order() {
        let existing = set_with(4, Some(2));
        let set = unwrap_photos(add_images(&existing, &[jpeg("x.jpg"), jpeg("y.jpg"), jpeg("z.jpg")]));

        assert_eq!(set.images.len(), MAX_IMAGES);
        assert_eq!(&set.images[..4], &existing.images[..]);
        assert_eq!(set.representative_index, Some(2));
        assert!(!can_add_more(&set));
    }

    #[test]
    fn test_non_images_are_skipped() {
        let update = add_images(&PhotoSet::default(), &[FileUpload::new("cv.pdf", "application/pdf", 10)]);
        assert!(update.is_none());
    }

    #[test]
    fn test_remove_representative_reselects_first() {
        let set = unwrap_photos(remove_image(&set_with(3, Some(1)), 1));
        assert_eq!(set.images.len(), 2);
        assert_eq!(set.representative_index, Some(0));
    }

    #[test]
    fn test_remove_last_image_clears_representative() {
        let set = unwrap_photos(remove_image(&set_with(1, Some(0)), 0));
        assert!(set.images.is_empty());
        assert_eq!(set.representative_index, None);
    }

    #[test]
    fn test_remove_before_representative_shifts_index() {
        let before = set_with(4, Some(3));
        let tracked = before.images[3].clone();

        let set = unwrap_photos(remove_image(&before, 1));
        assert_eq!(set.representative_index, Some(2));
        assert_eq!(set.images[2], tracked);
    }

    #[test]
    fn test_remove_after_representative_keeps_index() {
        let set = unwrap_photos(remove_image(&set_with(4, Some(1)), 3));
        assert_eq!(set.representative_index, Some(1));
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let set = set_with(2, Some(0));
        assert!(remove_image(&set, 5).is_none());
        assert!(select_representative(&set, 2).is_none());
    }

    #[test]
    fn test_advisories() {
        assert_eq!(advisories(&PhotoSet::default())[0].field, "images");
        assert_eq!(advisories(&set_with(2, None))[0].field, "representativeImage");
        assert!(advisories(&set_with(2, Some(1))).is_empty());
    }
}

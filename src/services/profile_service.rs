use crate::config::Config;
use crate::database::Storage;
use crate::error::AppResult;
use crate::models::{InterestProfile, Photo};

/// Derives `user_id`'s interest profile from their approved photos.
/// A user with no approved photos gets an empty profile, not an error.
/// Recomputed on every call; callers needing freshness just call again.
pub async fn build_profile(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
) -> AppResult<InterestProfile> {
    let photos = store
        .list_approved_photos_by_user(user_id, config.photo_scan_limit)
        .await?;
    Ok(profile_from_photos(&photos))
}

/// Accumulates the tag and category unions over an already-fetched photo
/// set. Unapproved photos never contribute.
pub fn profile_from_photos(photos: &[Photo]) -> InterestProfile {
    let mut profile = InterestProfile::default();
    for photo in photos.iter().filter(|photo| photo.is_approved) {
        profile.tags.extend(photo.tags.iter().cloned());
        profile.categories.insert(photo.category);
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoCategory;
    use chrono::{TimeZone, Utc};

    fn photo(category: PhotoCategory, tags: &[&str], approved: bool) -> Photo {
        Photo {
            id: "p".to_string(),
            user_id: "u".to_string(),
            image_ref: "img/p".to_string(),
            category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            is_approved: approved,
        }
    }

    #[test]
    fn empty_photo_set_gives_empty_profile() {
        assert!(profile_from_photos(&[]).is_empty());
    }

    #[test]
    fn profile_is_the_union_over_approved_photos() {
        let photos = vec![
            photo(PhotoCategory::Nature, &["sunset", "beach"], true),
            photo(PhotoCategory::Nature, &["sunset", "mountains"], true),
            photo(PhotoCategory::Food, &["pizza"], true),
        ];
        let profile = profile_from_photos(&photos);

        assert_eq!(profile.tags.len(), 4);
        assert!(profile.tags.contains("mountains"));
        assert_eq!(profile.categories.len(), 2);
        assert!(profile.categories.contains(&PhotoCategory::Food));
    }

    #[test]
    fn unapproved_photos_are_ignored() {
        let photos = vec![photo(PhotoCategory::Art, &["mural"], false)];
        assert!(profile_from_photos(&photos).is_empty());
    }
}

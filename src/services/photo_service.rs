use std::collections::HashSet;

use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classifier::{Classifier, ModerationResult};
use crate::config::Config;
use crate::database::Storage;
use crate::error::{AppError, AppResult};
use crate::models::{Photo, UserSummary};

/// Caller-supplied upload payload. The image bytes go to the classifier;
/// `image_ref` is the handle the external image store issued for them.
pub struct PhotoUpload {
    pub image: Vec<u8>,
    pub image_ref: String,
    pub description: Option<String>,
}

/// A feed entry with its owner attached.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPhoto {
    pub photo: Photo,
    pub user: UserSummary,
}

/// Runs the upload through moderation and stores the approved photo.
///
/// Photos of non-famous people are rejected. A classifier outage is not
/// a rejection: the safe default lets the upload through untagged for
/// matching purposes.
pub async fn upload_photo(
    store: &dyn Storage,
    classifier: &dyn Classifier,
    owner_id: &str,
    upload: PhotoUpload,
) -> AppResult<Photo> {
    let analysis = match classifier.classify(&upload.image).await {
        Ok(analysis) => analysis,
        Err(err) => {
            warn!(error = %err, "image analysis failed, applying safe default");
            ModerationResult::safe_default()
        }
    };

    if analysis.contains_people && !analysis.is_famous_person {
        return Err(AppError::PhotoRejected(
            "This photo seems to have a person in it. \
             Please share photos of things you like instead!"
                .to_string(),
        ));
    }

    let description = upload
        .description
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(analysis.description);

    let photo = Photo {
        id: Uuid::new_v4().to_string(),
        user_id: owner_id.to_string(),
        image_ref: upload.image_ref,
        category: analysis.category,
        tags: analysis.tags,
        description,
        created_at: Utc::now(),
        is_approved: true,
    };
    store.insert_photo(photo.clone()).await?;
    info!(photo = %photo.id, owner = owner_id, category = ?photo.category, "photo stored");
    Ok(photo)
}

/// The caller's own approved photos, newest first.
pub async fn my_photos(
    store: &dyn Storage,
    config: &Config,
    user_id: &str,
) -> AppResult<Vec<Photo>> {
    store
        .list_approved_photos_by_user(user_id, config.photo_scan_limit)
        .await
}

/// Recent approved photos from everyone the viewer has not blocked,
/// newest first, owners attached. Photos whose owner vanished are
/// skipped.
pub async fn photo_feed(
    store: &dyn Storage,
    config: &Config,
    viewer_id: &str,
) -> AppResult<Vec<FeedPhoto>> {
    let viewer = store
        .find_user(viewer_id)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;

    let excluding: HashSet<String> = viewer.blocked_users.iter().cloned().collect();
    let photos = store
        .list_approved_photos_excluding(&excluding, config.feed_page_size)
        .await?;

    let mut feed = Vec::new();
    for photo in photos {
        let Some(owner) = store.find_user(&photo.user_id).await? else {
            continue;
        };
        feed.push(FeedPhoto {
            user: owner.summary(),
            photo,
        });
    }
    Ok(feed)
}

/// Removes one of the caller's own photos.
pub async fn delete_photo(store: &dyn Storage, photo_id: &str, owner_id: &str) -> AppResult<()> {
    if !store.delete_photo_owned(photo_id, owner_id).await? {
        return Err(AppError::not_found("photo"));
    }
    Ok(())
}

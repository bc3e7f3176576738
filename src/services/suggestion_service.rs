use std::collections::HashSet;

use futures::future::join_all;
use tracing::debug;

use crate::config::Config;
use crate::database::Storage;
use crate::error::{AppError, AppResult};
use crate::models::{InterestProfile, PhotoCategory, Suggestion, User};

use super::{friendship_service, profile_service};

/// Canned explanation per category, in presentation order. Categories
/// missing here (notably `other`) never produce a phrase, even when
/// shared, so a suggestion can carry a positive score with no displayed
/// reason.
const CATEGORY_PHRASES: &[(PhotoCategory, &str)] = &[
    (PhotoCategory::Animals, "You both like animals"),
    (PhotoCategory::Nature, "You both like nature"),
    (PhotoCategory::Food, "You both like food"),
    (PhotoCategory::Sports, "You both like sports"),
    (PhotoCategory::Music, "You both like music"),
    (PhotoCategory::Art, "You both like art"),
    (PhotoCategory::Colors, "You both like colors"),
    (PhotoCategory::Places, "You both like places"),
    (PhotoCategory::Objects, "You both like similar things"),
];

/// Affinity between two profiles. A shared category implies broader
/// alignment than a single shared tag, so categories weigh more.
pub fn match_score(a: &InterestProfile, b: &InterestProfile) -> i64 {
    let shared_tags = a.tags.intersection(&b.tags).count() as i64;
    let shared_categories = a.categories.intersection(&b.categories).count() as i64;
    2 * shared_tags + 3 * shared_categories
}

/// Explanation phrases for the categories both profiles share, in
/// `CATEGORY_PHRASES` order, capped at `limit`.
pub fn shared_interest_phrases(
    a: &InterestProfile,
    b: &InterestProfile,
    limit: usize,
) -> Vec<String> {
    CATEGORY_PHRASES
        .iter()
        .filter(|(category, _)| a.categories.contains(category) && b.categories.contains(category))
        .map(|(_, phrase)| phrase.to_string())
        .take(limit)
        .collect()
}

/// Removes the subject, blocked pairs (either direction), inactive users
/// and anyone already linked to the subject by a friend request. Pure
/// and order-independent; ranking happens later.
pub fn eligible_candidates(
    subject: &User,
    candidates: Vec<User>,
    connected: &HashSet<String>,
) -> Vec<User> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate.id != subject.id
                && candidate.is_active
                && !subject.has_blocked(&candidate.id)
                && !candidate.has_blocked(&subject.id)
                && !connected.contains(&candidate.id)
        })
        .collect()
}

/// Ranked friend suggestions for `subject_id`.
///
/// Candidates sharing no tags and no categories with the subject are
/// dropped; the rest are ordered by score descending with candidate id
/// ascending as the tie-break, then capped. A subject with an empty
/// profile gets an empty list without anyone being scored.
pub async fn friend_suggestions(
    store: &dyn Storage,
    config: &Config,
    subject_id: &str,
) -> AppResult<Vec<Suggestion>> {
    let subject = store
        .find_user(subject_id)
        .await?
        .ok_or_else(|| AppError::not_found("user"))?;

    let subject_profile = profile_service::build_profile(store, config, subject_id).await?;
    if subject_profile.is_empty() {
        return Ok(Vec::new());
    }

    let connected = friendship_service::connected_user_ids(store, config, subject_id).await?;

    let mut excluding: HashSet<String> = subject.blocked_users.iter().cloned().collect();
    excluding.insert(subject.id.clone());
    let pool = store
        .list_active_users(&excluding, config.user_scan_limit)
        .await?;
    let candidates = eligible_candidates(&subject, pool, &connected);

    // Candidate photo scans are independent of each other; run them
    // concurrently. The final order never depends on completion order.
    let scanned = join_all(candidates.into_iter().map(|candidate| async move {
        let photos = store
            .list_approved_photos_by_user(&candidate.id, config.photo_scan_limit)
            .await;
        (candidate, photos)
    }))
    .await;

    let mut suggestions = Vec::new();
    for (candidate, photos) in scanned {
        let photos = match photos {
            Ok(photos) => photos,
            Err(err) => {
                // A candidate that cannot be read is skipped, not fatal.
                debug!(candidate = %candidate.id, error = %err, "skipping unreadable candidate");
                continue;
            }
        };
        let profile = profile_service::profile_from_photos(&photos);
        let score = match_score(&subject_profile, &profile);
        if score == 0 {
            continue;
        }
        let shared_interests =
            shared_interest_phrases(&subject_profile, &profile, config.max_shared_interests);
        // The scan is newest first, so the head is the sample photo.
        let sample_photo = photos.first().map(|photo| photo.image_ref.clone());
        suggestions.push(Suggestion {
            user: candidate.summary(),
            shared_interests,
            match_score: score,
            sample_photo,
        });
    }

    suggestions.sort_by(|a, b| {
        b.match_score
            .cmp(&a.match_score)
            .then_with(|| a.user.id.cmp(&b.user.id))
    });
    suggestions.truncate(config.max_suggestions);
    Ok(suggestions)
}

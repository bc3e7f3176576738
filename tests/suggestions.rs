mod common;

use snapmatch::database::MemoryStore;
use snapmatch::models::PhotoCategory;
use snapmatch::services::{friendship_service, moderation_service, suggestion_service};
use snapmatch::{AppError, Config};

use common::{seed_photo, seed_user};

#[tokio::test]
async fn user_without_photos_gets_no_suggestions() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "subject").await;
    seed_user(&store, "other").await;
    seed_photo(&store, "p1", "other", PhotoCategory::Nature, &["sunset"], 0).await;

    let suggestions = suggestion_service::friend_suggestions(&store, &config, "subject")
        .await
        .unwrap();
    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn shared_interests_rank_score_and_explain() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "subject").await;
    seed_user(&store, "x").await;
    seed_user(&store, "y").await;

    seed_photo(&store, "ps", "subject", PhotoCategory::Nature, &["sunset", "beach"], 0).await;
    seed_photo(&store, "px1", "x", PhotoCategory::Nature, &["sunset", "mountains"], 0).await;
    seed_photo(&store, "px2", "x", PhotoCategory::Nature, &["mountains"], 5).await;
    seed_photo(&store, "py", "y", PhotoCategory::Food, &["pizza"], 0).await;

    let suggestions = suggestion_service::friend_suggestions(&store, &config, "subject")
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    let top = &suggestions[0];
    assert_eq!(top.user.id, "x");
    // one shared tag, one shared category
    assert_eq!(top.match_score, 2 + 3);
    assert_eq!(top.shared_interests, ["You both like nature"]);
    // the sample is x's newest photo
    assert_eq!(top.sample_photo.as_deref(), Some("img/px2"));
}

#[tokio::test]
async fn ranking_is_capped_ordered_and_tie_broken_by_id() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "subject").await;
    seed_photo(&store, "ps", "subject", PhotoCategory::Nature, &["sunset"], 0).await;

    for i in 0..12 {
        let id = format!("cand-{i:02}");
        seed_user(&store, &id).await;
        let tags: &[&str] = if i == 11 { &["sunset"] } else { &[] };
        seed_photo(&store, &format!("p-{i:02}"), &id, PhotoCategory::Nature, tags, 0).await;
    }

    let suggestions = suggestion_service::friend_suggestions(&store, &config, "subject")
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 10);
    assert!(suggestions
        .windows(2)
        .all(|pair| pair[0].match_score >= pair[1].match_score));
    // the tag overlap puts cand-11 on top; equal scores follow id order
    assert_eq!(suggestions[0].user.id, "cand-11");
    assert_eq!(suggestions[0].match_score, 5);
    assert_eq!(suggestions[1].user.id, "cand-00");
    assert_eq!(suggestions[9].user.id, "cand-08");
}

#[tokio::test]
async fn blocking_excludes_in_both_directions() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "a").await;
    seed_user(&store, "b").await;
    seed_photo(&store, "pa", "a", PhotoCategory::Animals, &["dogs"], 0).await;
    seed_photo(&store, "pb", "b", PhotoCategory::Animals, &["dogs"], 0).await;

    // a single one-way block removes the pair from both lists
    moderation_service::block_user(&store, "a", "b").await.unwrap();

    let for_a = suggestion_service::friend_suggestions(&store, &config, "a")
        .await
        .unwrap();
    let for_b = suggestion_service::friend_suggestions(&store, &config, "b")
        .await
        .unwrap();
    assert!(for_a.is_empty());
    assert!(for_b.is_empty());

    // unblocking restores the match
    moderation_service::unblock_user(&store, "a", "b").await.unwrap();
    let for_a = suggestion_service::friend_suggestions(&store, &config, "a")
        .await
        .unwrap();
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].user.id, "b");
}

#[tokio::test]
async fn mutual_block_hides_fully_overlapping_users() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "a").await;
    seed_user(&store, "b").await;
    seed_photo(&store, "pa", "a", PhotoCategory::Music, &["guitar", "piano"], 0).await;
    seed_photo(&store, "pb", "b", PhotoCategory::Music, &["guitar", "piano"], 0).await;

    moderation_service::block_user(&store, "a", "b").await.unwrap();
    moderation_service::block_user(&store, "b", "a").await.unwrap();

    for subject in ["a", "b"] {
        let suggestions = suggestion_service::friend_suggestions(&store, &config, subject)
            .await
            .unwrap();
        assert!(suggestions.is_empty(), "expected empty list for {subject}");
    }
}

#[tokio::test]
async fn any_request_between_pair_blocks_suggestions_and_resends() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "a").await;
    seed_user(&store, "b").await;
    seed_user(&store, "c").await;
    seed_photo(&store, "pa", "a", PhotoCategory::Sports, &["football"], 0).await;
    seed_photo(&store, "pb", "b", PhotoCategory::Sports, &["football"], 0).await;
    seed_photo(&store, "pc", "c", PhotoCategory::Sports, &["football"], 0).await;

    let request = friendship_service::send_friend_request(&store, "a", "b")
        .await
        .unwrap();

    // pending: a and b no longer see each other, c is unaffected
    let for_a = suggestion_service::friend_suggestions(&store, &config, "a")
        .await
        .unwrap();
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].user.id, "c");
    let for_b = suggestion_service::friend_suggestions(&store, &config, "b")
        .await
        .unwrap();
    assert!(for_b.iter().all(|s| s.user.id != "a"));

    // a second request in the opposite direction is rejected
    assert!(matches!(
        friendship_service::send_friend_request(&store, "b", "a").await,
        Err(AppError::DuplicateRequest)
    ));

    // accepted: still excluded, still no second request
    friendship_service::accept_friend_request(&store, &request.id, "b")
        .await
        .unwrap();
    let for_a = suggestion_service::friend_suggestions(&store, &config, "a")
        .await
        .unwrap();
    assert!(for_a.iter().all(|s| s.user.id != "b"));
    assert!(matches!(
        friendship_service::send_friend_request(&store, "a", "b").await,
        Err(AppError::DuplicateRequest)
    ));
}

#[tokio::test]
async fn shared_unmapped_category_scores_without_explanation() {
    let store = MemoryStore::new();
    let config = Config::default();
    seed_user(&store, "subject").await;
    seed_user(&store, "peer").await;
    seed_photo(&store, "ps", "subject", PhotoCategory::Other, &["gadget"], 0).await;
    seed_photo(&store, "pp", "peer", PhotoCategory::Other, &["widget"], 0).await;

    let suggestions = suggestion_service::friend_suggestions(&store, &config, "subject")
        .await
        .unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].match_score, 3);
    assert!(suggestions[0].shared_interests.is_empty());
}

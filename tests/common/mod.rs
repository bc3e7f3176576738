use chrono::{DateTime, Duration, TimeZone, Utc};
use snapmatch::database::{MemoryStore, PhotoStore, UserStore};
use snapmatch::models::{Photo, PhotoCategory, User};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub async fn seed_user(store: &MemoryStore, id: &str) -> User {
    let user = User {
        id: id.to_string(),
        nickname: id.to_string(),
        display_name: id.to_string(),
        avatar_url: format!("avatar/{id}"),
        created_at: base_time(),
        blocked_users: Vec::new(),
        is_active: true,
    };
    store.insert_user(user.clone()).await.unwrap();
    user
}

pub async fn seed_photo(
    store: &MemoryStore,
    id: &str,
    owner_id: &str,
    category: PhotoCategory,
    tags: &[&str],
    minutes_after: i64,
) -> Photo {
    let photo = Photo {
        id: id.to_string(),
        user_id: owner_id.to_string(),
        image_ref: format!("img/{id}"),
        category,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        description: String::new(),
        created_at: base_time() + Duration::minutes(minutes_after),
        is_approved: true,
    };
    store.insert_photo(photo.clone()).await.unwrap();
    photo
}

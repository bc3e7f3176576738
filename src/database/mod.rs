pub mod friend_request_repo;
pub mod memory;
pub mod message_repo;
pub mod photo_repo;
pub mod report_repo;
pub mod user_repo;

pub use friend_request_repo::FriendRequestStore;
pub use memory::MemoryStore;
pub use message_repo::MessageStore;
pub use photo_repo::PhotoStore;
pub use report_repo::ReportStore;
pub use user_repo::UserStore;

/// Umbrella storage capability the services take: one handle covering
/// every collection. Blanket-implemented, so any type providing the
/// per-collection traits qualifies.
pub trait Storage:
    UserStore + PhotoStore + FriendRequestStore + MessageStore + ReportStore
{
}

impl<T> Storage for T where
    T: UserStore + PhotoStore + FriendRequestStore + MessageStore + ReportStore
{
}

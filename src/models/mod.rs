pub mod friend_requests;
pub mod messages;
pub mod photos;
pub mod reports;
pub mod suggestions;
pub mod users;

pub use friend_requests::{FriendRequest, RequestStatus};
pub use messages::{Message, MessageType};
pub use photos::{Photo, PhotoCategory};
pub use reports::Report;
pub use suggestions::{InterestProfile, Suggestion};
pub use users::{User, UserSummary};

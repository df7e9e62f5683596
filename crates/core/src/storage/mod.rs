mod conversions;
mod error;
mod http_mapping;
mod item;
mod store;
mod traits;

pub use conversions::{
    item_to_user, user_key, user_to_item, user_updates, ATTR_DOB, ATTR_EMAIL, ATTR_NAME,
    ATTR_USER_ID,
};
pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use item::{AttributeValue, Item};
pub use store::{UserStore, DEFAULT_TABLE_NAME};
pub use traits::{KeyValueStore, UserRepository};

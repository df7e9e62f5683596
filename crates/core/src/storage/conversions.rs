//! Attribute conversion functions for user items.
//!
//! Pure functions for converting between attribute maps and [`User`]. These
//! are testable in isolation without any backend.

use crate::user::User;

use super::{AttributeValue, Item, RepositoryError};

// ============================================================================
// Attribute names
// ============================================================================

/// Partition key attribute.
pub const ATTR_USER_ID: &str = "UserID";
pub const ATTR_NAME: &str = "Name";
pub const ATTR_EMAIL: &str = "Email";
pub const ATTR_DOB: &str = "DOB";

// ============================================================================
// User conversions
// ============================================================================

/// Key map for a user's item.
pub fn user_key(user_id: &str) -> Item {
    let mut key = Item::new();
    key.insert(ATTR_USER_ID.to_string(), AttributeValue::from(user_id));
    key
}

/// Convert a User to a full item, key included.
pub fn user_to_item(user: &User) -> Item {
    let mut item = user_key(&user.user_id);
    item.extend(user_updates(user));
    item
}

/// The mutable attributes of a user. `UserID` is never part of an update.
pub fn user_updates(user: &User) -> Item {
    let mut updates = Item::new();
    updates.insert(ATTR_NAME.to_string(), AttributeValue::from(user.name.as_str()));
    updates.insert(ATTR_EMAIL.to_string(), AttributeValue::from(user.email.as_str()));
    updates.insert(ATTR_DOB.to_string(), AttributeValue::from(user.dob.as_str()));
    updates
}

/// Convert a stored item to a User.
pub fn item_to_user(item: &Item) -> Result<User, RepositoryError> {
    Ok(User {
        user_id: get_string(item, ATTR_USER_ID)?,
        name: get_string(item, ATTR_NAME)?,
        email: get_string(item, ATTR_EMAIL)?,
        dob: get_string(item, ATTR_DOB)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(AttributeValue::as_s)
        .map(str::to_string)
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

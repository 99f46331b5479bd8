//! User identity and participant records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The active account identity, persisted by the session store.
///
/// Created at login/registration, overwritten on re-login, absent when
/// unauthenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl User {
    /// Extract the account's user record from an auth response body.
    ///
    /// Backends answer with either a nested `user` object or the fields at
    /// the top level; ids may be numeric or strings on the wire.
    pub fn from_auth_body(body: &Value) -> Option<User> {
        let obj = body.get("user").unwrap_or(body);

        let id = lenient_string(obj.get("id")?)?;
        let username = obj.get("username")?.as_str()?.to_string();
        let email = obj.get("email")?.as_str()?.to_string();

        Some(User {
            id,
            username,
            email,
        })
    }
}

/// A user recorded as attending an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

impl Participant {
    pub fn from_user(user: &User) -> Participant {
        Participant {
            user_id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }

    /// Identity match by user id OR email. A participant may carry only a
    /// partial identity, so both fields are checked.
    pub fn matches(&self, user: &User) -> bool {
        self.user_id == user.id || self.email == user.email
    }
}

/// Read a JSON field that may be a string or a number as a string.
pub(crate) fn lenient_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

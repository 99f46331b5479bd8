//! Registration and login flows against the agenda backend.
//!
//! Both flows are stateless request/response cycles, re-triggerable any
//! number of times. The only durable mutation is the credential persisted
//! on success; the surface layer decides what to do with the returned user
//! record.

use crate::error::{RdvError, RdvResult};
use crate::gateway::{ApiResponse, Gateway, Method};
use crate::session::SessionStore;
use crate::user::User;
use serde_json::{Value, json};

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Submitted registration form.
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Submitted login form.
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful auth call.
#[derive(Debug)]
pub struct AuthSuccess {
    /// The persisted bearer credential.
    pub token: String,
    /// The account's user record, when the backend included one.
    pub user: Option<User>,
    /// Full response body.
    pub body: Value,
}

/// Register a new account.
///
/// Validation short-circuits on the first failure, in form order; nothing
/// is sent to the backend unless every check passes.
pub async fn register<G: Gateway>(
    gateway: &G,
    store: &SessionStore,
    form: &RegisterForm,
) -> RdvResult<AuthSuccess> {
    if form.username.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(RdvError::Validation("Tous les champs sont requis".into()));
    }

    if form.password != form.confirm_password {
        return Err(RdvError::Validation(
            "Les mots de passe ne correspondent pas".into(),
        ));
    }

    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(RdvError::Validation(
            "Le mot de passe doit contenir au moins 5 caractères".into(),
        ));
    }

    let payload = json!({
        "username": form.username,
        "email": form.email,
        "password": form.password,
    });

    let response = gateway
        .call("auth/register", Method::POST, payload, None)
        .await?;

    finish_auth_call(response, store)
}

/// Log into an existing account.
///
/// Submits as-is: unlike registration, the login form carries no
/// client-side validation before the call.
pub async fn login<G: Gateway>(
    gateway: &G,
    store: &SessionStore,
    form: &LoginForm,
) -> RdvResult<AuthSuccess> {
    let payload = json!({
        "email": form.email,
        "password": form.password,
    });

    let response = gateway
        .call("auth/login", Method::POST, payload, None)
        .await?;

    finish_auth_call(response, store)
}

/// Shared tail of both flows: unwrap the envelope, persist the credential,
/// extract the user record.
fn finish_auth_call(response: ApiResponse, store: &SessionStore) -> RdvResult<AuthSuccess> {
    let body = response.into_result()?;

    let token = body
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| RdvError::Transport("réponse d'authentification sans jeton".into()))?
        .to_string();

    store.set_token(&token)?;

    let user = User::from_auth_body(&body);

    Ok(AuthSuccess { token, user, body })
}

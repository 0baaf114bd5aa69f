//! Auth state store: the current user and the session lifecycle.

use leptos::*;

use crate::services::{auth, token};
use crate::types::{ApiResult, User};

/// Context-provided store owning the current user.
///
/// `Copy` so components can move it into closures freely; the signals
/// inside are leptos arena handles.
#[derive(Clone, Copy)]
pub struct AuthStore {
    user: RwSignal<Option<User>>,
    loading: RwSignal<bool>,
}

/// Fetch the store from context. Panics outside the `App` tree.
pub fn use_auth() -> AuthStore {
    expect_context::<AuthStore>()
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            user: create_rw_signal(None),
            loading: create_rw_signal(true),
        }
    }

    /// Reactive read access to the current user.
    pub fn user(&self) -> ReadSignal<Option<User>> {
        self.user.read_only()
    }

    /// Whether a session probe or credential exchange is in flight.
    pub fn is_loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    /// Attempt to resolve an existing session once, at startup.
    ///
    /// An absent or stale token simply leaves the store anonymous; this
    /// failure is expected and only logged.
    pub fn init(&self) {
        let store = *self;
        spawn_local(async move {
            store.loading.set(true);
            match auth::current_user().await {
                Ok(user) => {
                    log::info!("session restored for {}", user.email);
                    store.user.set(Some(user));
                }
                Err(e) => {
                    log::debug!("no active session: {}", e);
                    store.user.set(None);
                }
            }
            store.loading.set(false);
        });
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        self.loading.set(true);
        let result = auth::login(email, password).await;
        self.loading.set(false);

        let user = result?;
        self.user.set(Some(user));
        Ok(())
    }

    pub async fn signup(&self, email: &str, username: &str, password: &str) -> ApiResult<()> {
        self.loading.set(true);
        let result = auth::signup(email, username, password).await;
        self.loading.set(false);

        let user = result?;
        self.user.set(Some(user));
        Ok(())
    }

    /// Best-effort server-side revocation, then unconditional local
    /// cleanup: the token and the user are always cleared.
    pub async fn logout(&self) {
        if let Err(e) = auth::logout().await {
            log::warn!("logout request failed: {}", e);
        }
        token::set_token(None);
        self.user.set(None);
    }

    /// Merge already-persisted profile fields into the in-memory user.
    ///
    /// This does not call the backend; callers persist first through
    /// the auth service and pass the confirmed values here.
    pub fn update_profile(
        &self,
        username: Option<String>,
        bio: Option<String>,
        avatar_url: Option<String>,
    ) {
        self.user.update(|current| {
            if let Some(user) = current {
                if let Some(username) = username {
                    user.full_name = Some(username.clone());
                    user.username = username;
                }
                if let Some(bio) = bio {
                    user.bio = Some(bio);
                }
                if let Some(avatar_url) = avatar_url {
                    user.avatar_url = Some(avatar_url);
                }
            }
        });
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

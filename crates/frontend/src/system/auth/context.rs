use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage;

/// Current vendor session, `None` when logged out
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Store id for product queries and forms
    pub fn store_id(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().and_then(|s| s.store_id.clone()))
    }

    pub fn login(&self, session: Session) {
        storage::save_session(&session);
        log::info!("logged in as {}", session.email);
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        storage::clear_session();
        self.session.set(None);
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Сессия восстанавливается из localStorage синхронно, до первого рендера
    let session = RwSignal::new(storage::load_session());
    provide_context(AuthContext { session });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

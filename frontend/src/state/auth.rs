use crate::utils::storage::{CredentialStore, LocalStorage, MemoryStore, TOKEN_KEY};
use leptos::*;
use std::rc::Rc;

/// Authentication state handed to the routing layer.
///
/// The token is never parsed or validated here: any non-empty value stored
/// under [`TOKEN_KEY`] counts as a credential.
#[derive(Clone)]
pub struct AuthContext {
    store: Rc<dyn CredentialStore>,
}

impl AuthContext {
    pub fn new(store: Rc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    pub fn from_local_storage() -> Self {
        Self::new(Rc::new(LocalStorage))
    }

    /// Context over an empty store. Every protected route redirects.
    pub fn anonymous() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    pub fn has_valid_credential(&self) -> bool {
        self.store
            .get(TOKEN_KEY)
            .is_some_and(|token| !token.is_empty())
    }
}

impl std::fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthContext").finish_non_exhaustive()
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    provide_auth(AuthContext::from_local_storage());
    view! { <>{children()}</> }
}

pub fn provide_auth(ctx: AuthContext) {
    provide_context::<AuthContext>(ctx);
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(AuthContext::anonymous)
}

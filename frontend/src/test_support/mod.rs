#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::auth::AuthContext;
    use crate::utils::storage::{MemoryStore, TOKEN_KEY};
    use std::rc::Rc;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = leptos::create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn auth_with_token(token: &str) -> AuthContext {
        AuthContext::new(Rc::new(MemoryStore::with_entry(TOKEN_KEY, token)))
    }

    pub fn auth_without_token() -> AuthContext {
        AuthContext::new(Rc::new(MemoryStore::new()))
    }
}

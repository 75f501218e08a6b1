use crate::{
    router::{RouteDefinition, RouteTable, HOME_PATH},
    state::auth::AuthContext,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Decides whether a navigation may reach its target route.
///
/// The route being left is not an input: only the target's
/// `requires_auth` flag and the injected credential matter.
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    auth: AuthContext,
}

impl NavigationGuard {
    pub fn new(auth: AuthContext) -> Self {
        Self { auth }
    }

    pub fn check(&self, to: &RouteDefinition) -> GuardDecision {
        if to.requires_auth && !self.auth.has_valid_credential() {
            GuardDecision::Redirect(HOME_PATH)
        } else {
            GuardDecision::Proceed
        }
    }

    /// Route that a navigation to `path` ends on, or `None` when nothing
    /// matches. The home route is public, so a redirect settles in one hop.
    pub fn resolve(&self, table: &RouteTable, path: &str) -> Option<&'static RouteDefinition> {
        let target = table.find(path)?;
        match self.check(target) {
            GuardDecision::Proceed => Some(target),
            GuardDecision::Redirect(fallback) => table.find(fallback),
        }
    }
}

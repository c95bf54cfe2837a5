//! Which pages need a session and which make no sense with one

pub const LOGIN_PATH: &str = "/auth/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Pages for logged-out users only
const PUBLIC_AUTH_PATHS: [&str; 4] = [
    "/auth/login",
    "/auth/forgot-password",
    "/auth/verify-code",
    "/auth/reset-password",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

fn is_dashboard(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

pub fn decide(path: &str, has_session: bool) -> RouteDecision {
    let path = normalize(path);
    if path == "/" {
        return RouteDecision::Allow;
    }
    if is_dashboard(path) && !has_session {
        return RouteDecision::Redirect(LOGIN_PATH);
    }
    if has_session && PUBLIC_AUTH_PATHS.contains(&path) {
        return RouteDecision::Redirect(DASHBOARD_PATH);
    }
    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_requires_session() {
        assert_eq!(decide("/dashboard", false), RouteDecision::Redirect(LOGIN_PATH));
        assert_eq!(
            decide("/dashboard/products/edit/prod-1", false),
            RouteDecision::Redirect(LOGIN_PATH)
        );
        assert_eq!(decide("/dashboard/orders", true), RouteDecision::Allow);
    }

    #[test]
    fn auth_pages_bounce_logged_in_users() {
        for path in PUBLIC_AUTH_PATHS {
            assert_eq!(decide(path, true), RouteDecision::Redirect(DASHBOARD_PATH));
            assert_eq!(decide(path, false), RouteDecision::Allow);
        }
        assert_eq!(
            decide("/auth/verify-code?email=a%40b.c", true),
            RouteDecision::Redirect(DASHBOARD_PATH)
        );
    }

    #[test]
    fn root_is_never_redirected() {
        assert_eq!(decide("/", true), RouteDecision::Allow);
        assert_eq!(decide("/", false), RouteDecision::Allow);
        assert_eq!(decide("", false), RouteDecision::Allow);
    }

    #[test]
    fn lookalike_paths_are_not_dashboard() {
        assert_eq!(decide("/dashboards", false), RouteDecision::Allow);
        assert_eq!(decide("/dashboard/", false), RouteDecision::Redirect(LOGIN_PATH));
    }
}

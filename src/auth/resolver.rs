use actix_web::HttpRequest;

use crate::auth::Principal;

/// Resolves the transport-authenticated principal for an inbound request.
///
/// Injected into the middleware so handlers never touch ambient platform
/// state, and so tests can supply principals without a real front end.
pub trait PrincipalResolver: Send + Sync {
    fn resolve(&self, req: &HttpRequest) -> Option<Principal>;
}

/// Reads the account name the authenticating reverse proxy stamped into a
/// trusted header. The proxy strips any client-supplied copy of the header,
/// so a present, non-empty value is the verified identity.
pub struct TrustedHeaderResolver {
    header_name: String,
}

impl TrustedHeaderResolver {
    pub fn new(header_name: &str) -> Self {
        Self {
            header_name: header_name.to_string(),
        }
    }
}

impl PrincipalResolver for TrustedHeaderResolver {
    fn resolve(&self, req: &HttpRequest) -> Option<Principal> {
        req.headers()
            .get(&self.header_name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Principal::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_resolves_principal_from_header() {
        let resolver = TrustedHeaderResolver::new("X-Remote-User");
        let req = TestRequest::default()
            .insert_header(("X-Remote-User", "alice"))
            .to_http_request();

        let principal = resolver.resolve(&req);
        assert_eq!(principal, Some(Principal::new("alice")));
    }

    #[test]
    fn test_missing_header_yields_no_principal() {
        let resolver = TrustedHeaderResolver::new("X-Remote-User");
        let req = TestRequest::default().to_http_request();

        assert!(resolver.resolve(&req).is_none());
    }

    #[test]
    fn test_blank_header_yields_no_principal() {
        let resolver = TrustedHeaderResolver::new("X-Remote-User");
        let req = TestRequest::default()
            .insert_header(("X-Remote-User", "   "))
            .to_http_request();

        assert!(resolver.resolve(&req).is_none());
    }

    #[test]
    fn test_header_name_is_configurable() {
        let resolver = TrustedHeaderResolver::new("X-Forwarded-User");
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-User", "bob"))
            .to_http_request();

        assert_eq!(resolver.resolve(&req), Some(Principal::new("bob")));
    }
}

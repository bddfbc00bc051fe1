use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures::future::LocalBoxFuture;

use crate::{
    auth::{Principal, PrincipalResolver},
    errors::AppError,
};

/// Runs the injected [`PrincipalResolver`] and stores the result in request
/// extensions. Requests without an identity pass through untouched; the
/// [`AuthenticatedUser`] extractor is what turns a missing principal into 401,
/// so unauthenticated surfaces like `/health` keep working.
pub struct AuthMiddleware {
    resolver: Arc<dyn PrincipalResolver>,
}

impl AuthMiddleware {
    pub fn new(resolver: Arc<dyn PrincipalResolver>) -> Self {
        Self { resolver }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            resolver: Arc::clone(&self.resolver),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    resolver: Arc<dyn PrincipalResolver>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if let Some(principal) = self.resolver.resolve(req.request()) {
            req.extensions_mut().insert(principal);
        }

        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Extractor for the authenticated principal in handlers.
pub struct AuthenticatedUser(pub Principal);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let principal = req
            .extensions()
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| AppError::Unauthenticated("No authenticated identity".to_string()));

        ready(principal.map(AuthenticatedUser))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, web, App, HttpResponse};

    use crate::auth::TrustedHeaderResolver;

    #[get("/whoami")]
    async fn whoami(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
        Ok(HttpResponse::Ok().body(auth.0.name))
    }

    fn test_resolver() -> Arc<dyn PrincipalResolver> {
        Arc::new(TrustedHeaderResolver::new("X-Remote-User"))
    }

    #[actix_web::test]
    async fn test_authenticated_request_reaches_handler() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(test_resolver()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("X-Remote-User", "alice"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        assert_eq!(body, web::Bytes::from_static(b"alice"));
    }

    #[actix_web::test]
    async fn test_unauthenticated_request_is_rejected() {
        let app = test::init_service(
            App::new()
                .wrap(AuthMiddleware::new(test_resolver()))
                .service(whoami),
        )
        .await;

        let req = test::TestRequest::get().uri("/whoami").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }
}

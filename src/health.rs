use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

/// Sizes of the content loaded at startup.
#[derive(Debug, Clone, Copy)]
pub struct ContentStats {
    pub projects: usize,
    pub contacts: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    projects: usize,
    contacts: usize,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Unhealthy while there is no project to render
#[get("/ready")]
pub async fn readiness(stats: web::Data<ContentStats>) -> impl Responder {
    if stats.projects > 0 {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            projects: stats.projects,
            contacts: stats.contacts,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            projects: stats.projects,
            contacts: stats.contacts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn readiness_reports_counts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentStats {
                    projects: 3,
                    contacts: 4,
                }))
                .service(readiness),
        )
        .await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["projects"], 3);
        assert_eq!(body["contacts"], 4);
    }

    #[actix_web::test]
    async fn readiness_unhealthy_on_empty_catalog() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentStats {
                    projects: 0,
                    contacts: 4,
                }))
                .service(readiness),
        )
        .await;
        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "unhealthy");
    }
}

use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::contact::application::domain::ContactLink;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    responses(
        (
            status = 200,
            description = "Contact methods in display order",
            body = inline(SuccessResponse<Vec<ContactLink>>),
            example = json!({
                "success": true,
                "data": [
                    { "id": "email", "name": "Email", "value": "me@example.com", "icon": "/icons/gmail.svg", "type": "email" },
                    { "id": "github", "name": "GitHub", "url": "https://github.com/me", "icon": "/icons/github.svg", "type": "link" }
                ]
            })
        ),
    )
)]
#[get("/api/contacts")]
pub async fn get_contacts_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.get_contacts_use_case.execute().await)
}

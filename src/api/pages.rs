use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder};

pub async fn dashboard() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/dashboard.html"))
}

pub async fn absen() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(include_str!("../../static/absen.html"))
}

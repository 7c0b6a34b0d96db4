use actix_web::{HttpResponse, web};

use crate::errors::NOT_FOUND_PAGE;
use crate::handlers::student_handlers;

/// Register the student CRUD routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(student_handlers::list))
        .route("/agregar", web::get().to(student_handlers::new_form))
        .route("/agregar", web::post().to(student_handlers::create))
        .route("/editar/{id}", web::get().to(student_handlers::edit_form))
        .route("/editar/{id}", web::post().to(student_handlers::update))
        .route("/eliminar/{id}", web::get().to(student_handlers::delete));
}

/// Static assets from `public_dir`, mounted at the root after the routes.
/// Anything it cannot serve gets the 404 page.
pub fn static_files(public_dir: &str) -> actix_files::Files {
    actix_files::Files::new("/", public_dir).default_handler(web::to(not_found))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(NOT_FOUND_PAGE)
}

use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::student;
use crate::templates_structs::{PageContext, StudentEditTemplate};

pub async fn edit_form(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match student::find_by_id(&pool, id).await? {
        Some(s) => {
            let tmpl = StudentEditTemplate {
                ctx: PageContext::new("/editar"),
                student: s,
            };
            render(tmpl)
        }
        None => Err(AppError::NotFound),
    }
}

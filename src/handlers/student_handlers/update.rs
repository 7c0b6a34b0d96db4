use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::student::{self, RenameForm};
use super::helpers;

/// Rename a student. Only `nombre` is editable here; the value is stored as submitted.
pub async fn update(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    form: web::Form<RenameForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let affected = student::update_name(&pool, id, &form.nuevo_dato).await?;
    log::info!("Student {id} renamed ({affected} row(s) updated)");

    Ok(helpers::redirect_to_list())
}

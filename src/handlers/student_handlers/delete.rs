use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::student;
use super::helpers;

pub async fn delete(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let affected = student::delete(&pool, id).await?;
    log::info!("Student {id} deleted ({affected} row(s) removed)");

    Ok(helpers::redirect_to_list())
}

use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::student;
use crate::templates_structs::{PageContext, StudentListTemplate};

pub async fn list(
    pool: web::Data<DbPool>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    let course_id = config.listing_course_id;
    let students = student::find_by_course(&pool, course_id).await?;

    let tmpl = StudentListTemplate {
        ctx: PageContext::new("/"),
        course_id,
        students,
    };
    render(tmpl)
}

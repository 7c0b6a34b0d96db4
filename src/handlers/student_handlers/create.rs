use actix_web::{web, HttpResponse};

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::models::student::{self, StudentForm};
use crate::templates_structs::{PageContext, StudentAddTemplate};
use super::helpers;

pub async fn new_form() -> Result<HttpResponse, AppError> {
    let tmpl = StudentAddTemplate {
        ctx: PageContext::new("/agregar"),
        form: StudentForm::default(),
        errors: vec![],
    };
    render(tmpl)
}

pub async fn create(
    pool: web::Data<DbPool>,
    form: web::Form<StudentForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let new = match helpers::validate_student_form(&form) {
        Ok(new) => new,
        Err(errors) => {
            log::debug!("Rejected student form: {} field error(s)", errors.len());
            let tmpl = StudentAddTemplate {
                ctx: PageContext::new("/agregar"),
                form,
                errors,
            };
            return render(tmpl);
        }
    };

    let id = student::create(&pool, &new).await?;
    log::info!("Student {id} created ({} {})", new.nombre, new.apellido);

    Ok(helpers::redirect_to_list())
}

use actix_web::HttpResponse;

use crate::models::student::{NewStudent, StudentForm};
use crate::validate::{self, FieldError};

/// Validate the add form. Every rule runs, so the caller gets all failures at once.
pub fn validate_student_form(form: &StudentForm) -> Result<NewStudent, Vec<FieldError>> {
    let mut errors = vec![];
    errors.extend(validate::validate_required(&form.nombre, "nombre", "El nombre es obligatorio"));
    errors.extend(validate::validate_int(&form.edad, "edad", "La edad debe ser un número entero"));
    errors.extend(validate::validate_required(&form.apellido, "apellido", "El apellido es obligatorio"));
    errors.extend(validate::validate_int(
        &form.id_curso,
        "id_curso",
        "El ID del curso debe ser un número entero",
    ));

    match (validate::parse_int(&form.edad), validate::parse_int(&form.id_curso)) {
        (Some(edad), Some(id_curso)) if errors.is_empty() => Ok(NewStudent {
            nombre: form.nombre.trim().to_string(),
            apellido: form.apellido.trim().to_string(),
            edad,
            id_curso,
        }),
        _ => Err(errors),
    }
}

pub fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .finish()
}

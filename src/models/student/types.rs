use serde::Deserialize;

/// Full `alumnos` row, as shown on the edit form.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub edad: i64,
    pub id_curso: i64,
}

/// One row of the listing page: student joined with its course name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct StudentListItem {
    pub id: i64,
    pub nombre: String,
    pub nombre_curso: String,
}

/// Validated data for a new student.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub nombre: String,
    pub apellido: String,
    pub edad: i64,
    pub id_curso: i64,
}

/// Raw add-form body. Numbers stay strings until validated so bad input
/// reaches the form errors instead of a 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub edad: String,
    #[serde(default)]
    pub apellido: String,
    #[serde(default)]
    pub id_curso: String,
}

/// Edit-form body: the new name only.
#[derive(Debug, Deserialize)]
pub struct RenameForm {
    #[serde(rename = "nuevoDato", default)]
    pub nuevo_dato: String,
}

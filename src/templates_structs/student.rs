use askama::Template;

use crate::models::student::{Student, StudentForm, StudentListItem};
use crate::validate::FieldError;
use super::PageContext;

#[derive(Template)]
#[template(path = "students/list.html")]
pub struct StudentListTemplate {
    pub ctx: PageContext,
    pub course_id: i64,
    pub students: Vec<StudentListItem>,
}

#[derive(Template)]
#[template(path = "students/add.html")]
pub struct StudentAddTemplate {
    pub ctx: PageContext,
    pub form: StudentForm,
    pub errors: Vec<FieldError>,
}

#[derive(Template)]
#[template(path = "students/edit.html")]
pub struct StudentEditTemplate {
    pub ctx: PageContext,
    pub student: Student,
}

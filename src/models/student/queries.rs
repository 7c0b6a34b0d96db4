use crate::db::DbPool;
use crate::errors::AppError;
use super::types::*;

/// Students enrolled in `course_id`, joined with the course name.
/// Row order is whatever the join yields.
pub async fn find_by_course(pool: &DbPool, course_id: i64) -> Result<Vec<StudentListItem>, AppError> {
    let rows = sqlx::query_as::<_, StudentListItem>(
        "SELECT alumnos.id, alumnos.nombre, cursos.nombre_curso \
         FROM alumnos \
         JOIN cursos ON alumnos.id_curso = cursos.id_curso \
         WHERE cursos.id_curso = ?",
    )
    .bind(course_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<Student>, AppError> {
    let row = sqlx::query_as::<_, Student>(
        "SELECT id, nombre, apellido, edad, id_curso FROM alumnos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a student and return the generated id. `id_curso` is stored as given.
///
/// MySQL reports the id with the insert result. SQLite through the `Any`
/// driver does not, so the id is read back with `last_insert_rowid()` on the
/// same connection.
pub async fn create(pool: &DbPool, new: &NewStudent) -> Result<i64, AppError> {
    let mut conn = pool.acquire().await?;

    let result = sqlx::query(
        "INSERT INTO alumnos (nombre, edad, apellido, id_curso) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.nombre)
    .bind(new.edad)
    .bind(&new.apellido)
    .bind(new.id_curso)
    .execute(&mut *conn)
    .await?;

    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    let id: i64 = sqlx::query_scalar("SELECT last_insert_rowid()")
        .fetch_one(&mut *conn)
        .await?;

    Ok(id)
}

/// Set a student's name. Returns rows affected (0 when the id does not exist).
pub async fn update_name(pool: &DbPool, id: i64, nombre: &str) -> Result<u64, AppError> {
    let result = sqlx::query("UPDATE alumnos SET nombre = ? WHERE id = ?")
        .bind(nombre)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete a student. Returns rows affected (0 when the id does not exist).
pub async fn delete(pool: &DbPool, id: i64) -> Result<u64, AppError> {
    let result = sqlx::query("DELETE FROM alumnos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

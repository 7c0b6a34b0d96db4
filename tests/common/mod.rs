//! Shared test infrastructure.
//!
//! Every test gets its own in-memory SQLite database behind the same `Any`
//! pool type the application uses against MySQL.

#![allow(dead_code)]

use actix_web::{body::MessageBody, dev::ServiceResponse, test};
use sqlx::any::AnyPoolOptions;

use alumnos::config::AppConfig;
use alumnos::db::DbPool;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const LISTED_COURSE_ID: i64 = 5;
pub const LISTED_COURSE_NAME: &str = "Programación Web";
pub const OTHER_COURSE_ID: i64 = 3;
pub const OTHER_COURSE_NAME: &str = "Redes";

const SCHEMA: &[&str] = &[
    "CREATE TABLE cursos (
        id_curso INTEGER PRIMARY KEY,
        nombre_curso TEXT NOT NULL
    )",
    "CREATE TABLE alumnos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL,
        edad INTEGER NOT NULL,
        id_curso INTEGER NOT NULL
    )",
];

// ============================================================================
// DATABASE SETUP
// ============================================================================

/// Create a fresh database with both tables and two courses.
///
/// The pool holds exactly one connection that never expires, since each
/// SQLite in-memory connection is its own database.
pub async fn setup_test_db() -> DbPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    for stmt in SCHEMA {
        sqlx::query(stmt)
            .execute(&pool)
            .await
            .expect("Failed to create schema");
    }

    seed_course(&pool, LISTED_COURSE_ID, LISTED_COURSE_NAME).await;
    seed_course(&pool, OTHER_COURSE_ID, OTHER_COURSE_NAME).await;

    pool
}

pub async fn seed_course(pool: &DbPool, id: i64, name: &str) {
    sqlx::query("INSERT INTO cursos (id_curso, nombre_curso) VALUES (?, ?)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to seed course");
}

pub async fn count_students(pool: &DbPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM alumnos")
        .fetch_one(pool)
        .await
        .expect("Failed to count students")
}

/// Every stored student id, ascending.
pub async fn stored_ids(pool: &DbPool) -> Vec<i64> {
    sqlx::query_scalar("SELECT id FROM alumnos ORDER BY id")
        .fetch_all(pool)
        .await
        .expect("Failed to list student ids")
}

/// Config pointing at the listed course; the database URL is unused in tests.
pub fn test_config() -> AppConfig {
    AppConfig {
        listing_course_id: LISTED_COURSE_ID,
        database_url: "sqlite::memory:".to_string(),
        ..AppConfig::default()
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build the application service over a pool, the way `main` wires it.
/// Test files pull this in with `#[macro_use] mod common;`.
macro_rules! init_app {
    ($pool:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data(actix_web::web::Data::new($crate::common::test_config()))
                .configure(alumnos::routes::configure),
        )
        .await
    };
}

/// URL-encode form fields the way a browser submits them.
pub fn form_body(fields: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(fields).expect("Failed to encode form")
}

pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload(form_body(fields))
}

pub fn location(resp: &ServiceResponse<impl MessageBody>) -> Option<String> {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub mod student_handlers;

pub mod helpers;
pub mod list;
pub mod create;
pub mod read;
pub mod update;
pub mod delete;

pub use self::list::list;
pub use self::create::{new_form, create};
pub use self::read::edit_form;
pub use self::update::update;
pub use self::delete::delete;

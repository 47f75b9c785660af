pub mod health;
pub mod create;
pub mod list;
pub mod get;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use create::create_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;

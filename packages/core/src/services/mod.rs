//! Business logic between the HTTP handlers and the repositories.

pub mod hello;
pub mod user;

pub use hello::HelloService;
pub use user::UserService;

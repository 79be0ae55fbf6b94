#![forbid(unsafe_code)]

pub mod app;
pub mod console;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::run_menu;
pub use console::Console;
pub use context::AppContext;
pub use routes::MenuAction;

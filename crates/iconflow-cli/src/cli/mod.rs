pub mod app;
pub mod extract;
pub mod inner;
pub mod list;
pub mod logging;
pub mod prompt;
pub mod selection;

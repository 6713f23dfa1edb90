pub mod book;
pub mod bootstrap;
pub mod config;
pub mod display;
pub mod error;
pub mod store;

pub use bootstrap::{run, Bootstrapper};
pub use error::{Error, ErrorKind};

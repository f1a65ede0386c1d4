pub mod cli;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod server;

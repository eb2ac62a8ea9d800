//! Types and client for the Lokalise API v2
//! https://developers.lokalise.com/reference/lokalise-rest-api

mod branch;
pub mod client;
mod collection;
mod comment;
mod common;
mod config;
mod contributor;
mod file;
mod language;
mod process;
mod project;

pub use branch::*;
pub use client::{Client, ClientBuilder};
pub use collection::*;
pub use comment::*;
pub use common::{Model, RawObject, Timestamp};
pub use config::Config;
pub use contributor::*;
pub use file::*;
pub use language::*;
pub use process::*;
pub use project::*;

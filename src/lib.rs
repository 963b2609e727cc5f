pub mod cli;
pub mod codec;
pub mod config;
pub mod db;
pub mod encoder;
pub mod error;
pub mod facedb;
pub mod matcher;
mod metrics;
pub mod server;
pub mod service;

pub use config::Opts;
pub use error::{Error, Result};
pub use facedb::{FaceDB, FaceDBBuilder};
pub use service::FaceService;

pub mod config;
pub mod db;
pub mod error;
pub mod seed;
pub mod server;

pub use error::PetdexError;

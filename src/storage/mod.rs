pub mod db;
mod guestbook;
pub mod models;
mod photos;
mod tables;
mod videos;

pub use db::{Database, DatabaseError};
pub use tables::*;

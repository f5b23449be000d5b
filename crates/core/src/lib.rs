//! Domain types shared by the database and HTTP layers.

pub mod error;
pub mod forms;
pub mod types;

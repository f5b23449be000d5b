//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod kind_repo;
pub mod owner_repo;
pub mod pet_repo;

pub use kind_repo::KindRepo;
pub use owner_repo::OwnerRepo;
pub use pet_repo::PetRepo;

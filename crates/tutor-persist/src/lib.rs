pub mod client;
pub mod error;
pub mod memory;
pub mod models;
pub mod repo;
pub mod repositories;

pub use client::PersistClient;
pub use error::{PersistError, Result};
pub use memory::InMemoryThreadRepo;
pub use models::ThreadRecord;
pub use repo::ThreadRepo;
pub use repositories::MongoThreadRepo;

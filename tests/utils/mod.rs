pub mod factories;
pub mod memory_repo;

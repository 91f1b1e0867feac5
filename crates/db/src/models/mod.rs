//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` request DTO as received from clients
//! - A validated record type accepted by the repository for writes

pub mod book;

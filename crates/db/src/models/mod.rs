//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Serialize` response struct safe for API output
//! - `Deserialize` create/update DTOs for inserts and patches

pub mod department_role;
pub mod member;
pub mod stats;

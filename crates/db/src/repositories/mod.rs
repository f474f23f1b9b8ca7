//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod department_role_repo;
pub mod member_repo;
pub mod stats_repo;

pub use department_role_repo::DepartmentRoleRepo;
pub use member_repo::MemberRepo;
pub use stats_repo::StatsRepo;

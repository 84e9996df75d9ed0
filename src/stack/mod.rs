//! Stack attribute identifiers.
//!
//! Strongly-typed identifiers (FrameworkId, PackageManagerId, TestFrameworkId,
//! DatabaseId, StylingId, AuthId, LanguageId) for every attribute family the
//! classifier can label. Each enum serializes to a stable string key that is
//! part of the output contract: adding a variant is fine, renaming a key is
//! not. Unknown keys deserialize into `Custom(String)` so records written by a
//! newer version still load.

#[macro_use]
pub mod id_enum_macro;

pub mod auth_id;
pub mod database_id;
pub mod framework_id;
pub mod language_id;
pub mod package_manager_id;
pub mod styling_id;
pub mod test_framework_id;

pub use auth_id::AuthId;
pub use database_id::DatabaseId;
pub use framework_id::FrameworkId;
pub use language_id::LanguageId;
pub use package_manager_id::PackageManagerId;
pub use styling_id::StylingId;
pub use test_framework_id::TestFrameworkId;

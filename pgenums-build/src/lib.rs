//! Build-time enum binding generator.
//!
//! This crate scans SQL schema files for `CREATE TYPE ... AS ENUM`
//! declarations and generates Rust bindings for them.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     pgenums_build::generate()
//!         .schema("db/schema.sql")
//!         .output_file("src/generated/enums.rs")
//!         .run()
//!         .expect("Failed to generate enum bindings");
//!
//!     println!("cargo:rerun-if-changed=db/schema.sql");
//! }
//! ```

mod generator;

pub use generator::EnumGenerator;

/// Create a new generator with default settings.
///
/// # Example
///
/// ```ignore
/// pgenums_build::generate()
///     .schema("db/schema.sql")
///     .output_file("src/generated/enums.rs")
///     .run()
///     .expect("Failed to generate enum bindings");
/// ```
pub fn generate() -> EnumGenerator {
    EnumGenerator::new()
}

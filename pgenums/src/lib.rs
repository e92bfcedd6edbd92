//! Generate typed enum bindings from SQL `CREATE TYPE ... AS ENUM`
//! declarations.
//!
//! The pipeline scans schema text character by character, skipping SQL
//! comments and unrelated statements, extracts every
//! `CREATE TYPE <name> AS ENUM (...)` statement, and renders one block of
//! target-language source per declaration. Rendering is pluggable behind
//! [`emit::Render`]; Go and Rust backends ship with the crate.
//!
//! ```
//! use pgenums::emit::GoRenderer;
//! use pgenums::types::Strictness;
//!
//! let schema = "CREATE TYPE status AS ENUM ('active', 'inactive');";
//! let out = pgenums::generate(schema, &GoRenderer::new("db"), Strictness::Lax).unwrap();
//! assert_eq!(out.count, 1);
//! assert!(out.code.contains("StatusActive Status = \"Active\""));
//! ```

pub mod emit;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod ident;
pub mod scanner;
pub mod types;

pub use errors::EmitError;
pub use extract::Extractor;
pub use generator::{Generated, generate};
pub use scanner::Scanner;
pub use types::{EnumDecl, Strictness};

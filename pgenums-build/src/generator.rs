//! Builder that drives the pgenums pipeline from build scripts.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use pgenums::emit::RustRenderer;
use pgenums::types::Strictness;

/// Builder for configuring and running the enum binding generator.
pub struct EnumGenerator {
    schemas: Vec<PathBuf>,
    output_file: PathBuf,
    strictness: Strictness,
}

impl EnumGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            schemas: Vec::new(),
            output_file: PathBuf::from("src/generated/enums.rs"),
            strictness: Strictness::Lax,
        }
    }

    /// Add a schema file to scan.
    ///
    /// Can be called multiple times; generated declarations keep the order
    /// of the schema files.
    pub fn schema(mut self, path: impl Into<PathBuf>) -> Self {
        self.schemas.push(path.into());
        self
    }

    /// Set the output file path for the generated bindings.
    ///
    /// Default: `src/generated/enums.rs`
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Require `--` line comments and drop empty enum values.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strictness = if strict {
            Strictness::Strict
        } else {
            Strictness::Lax
        };
        self
    }

    /// Run the generator.
    ///
    /// This reads all configured schema files, extracts their enum
    /// declarations, and writes the generated bindings to the output file.
    pub fn run(self) -> Result<()> {
        let mut schema = String::new();
        for path in &self.schemas {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            schema.push_str(&content);
            schema.push('\n');
        }

        let generated = pgenums::generate(&schema, &RustRenderer::new(), self.strictness)
            .context("Failed to render enum bindings")?;

        if let Some(parent) = self.output_file.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        // Only write if content has changed (avoids unnecessary recompilation)
        let should_write = match fs::read_to_string(&self.output_file) {
            Ok(existing) => existing != generated.code,
            Err(_) => true,
        };

        if should_write {
            fs::write(&self.output_file, &generated.code)
                .with_context(|| format!("Failed to write {}", self.output_file.display()))?;
            eprintln!(
                "pgenums-build: Generated {} with {} enum types",
                self.output_file.display(),
                generated.count
            );
        }

        Ok(())
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_schema(dir: &std::path::Path, content: &str) -> PathBuf {
        let path = dir.join("schema.sql");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn generates_bindings_from_a_schema_file() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), "CREATE TYPE status AS ENUM ('active');");
        let output = dir.path().join("generated/enums.rs");

        EnumGenerator::new()
            .schema(&schema)
            .output_file(&output)
            .run()
            .unwrap();

        let code = fs::read_to_string(&output).unwrap();
        assert!(code.contains("pub struct Status(String)"));
        assert!(code.contains("pub const ACTIVE: &'static str = \"Active\""));
    }

    #[test]
    fn unchanged_content_is_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let schema = write_schema(dir.path(), "CREATE TYPE status AS ENUM ('active');");
        let output = dir.path().join("enums.rs");

        let run = || {
            EnumGenerator::new()
                .schema(&schema)
                .output_file(&output)
                .run()
                .unwrap()
        };

        run();
        let first_modified = fs::metadata(&output).unwrap().modified().unwrap();
        run();
        let second_modified = fs::metadata(&output).unwrap().modified().unwrap();
        assert_eq!(first_modified, second_modified);
    }

    #[test]
    fn multiple_schemas_concatenate_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.sql");
        let second = dir.path().join("b.sql");
        fs::write(&first, "CREATE TYPE alpha AS ENUM ('a');").unwrap();
        fs::write(&second, "CREATE TYPE beta AS ENUM ('b');").unwrap();
        let output = dir.path().join("enums.rs");

        EnumGenerator::new()
            .schema(&first)
            .schema(&second)
            .output_file(&output)
            .run()
            .unwrap();

        let code = fs::read_to_string(&output).unwrap();
        let alpha = code.find("pub struct Alpha").unwrap();
        let beta = code.find("pub struct Beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn missing_schema_file_is_a_contextual_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = EnumGenerator::new()
            .schema(dir.path().join("missing.sql"))
            .output_file(dir.path().join("enums.rs"))
            .run()
            .unwrap_err();
        assert!(err.to_string().contains("missing.sql"));
    }

    #[test]
    fn empty_schema_list_produces_the_empty_unit() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("enums.rs");

        EnumGenerator::new().output_file(&output).run().unwrap();

        let code = fs::read_to_string(&output).unwrap();
        assert!(code.contains("Code generated by pgenums"));
    }
}

//! Go rendering backend.

use std::fmt::Write;

use crate::errors::EmitError;
use crate::types::EnumDecl;

use super::Render;

/// Renders declarations as Go source in the `database/sql` wrapper style:
/// a string type, one constant per value, validity helpers and the
/// `Scan`/`Value` pair.
pub struct GoRenderer {
    package: String,
}

impl GoRenderer {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }
}

impl Render for GoRenderer {
    fn render(&self, decl: &EnumDecl, first: bool) -> Result<String, EmitError> {
        let mut out = String::new();
        let ty = &decl.name;

        if first {
            let _ = writeln!(out, "// Code generated by \"pgenums\"; DO NOT EDIT.");
            let _ = writeln!(out);
            let _ = writeln!(out, "package {}", self.package);
            let _ = writeln!(out);
            let _ = writeln!(out, "import (");
            let _ = writeln!(out, "\t\"database/sql/driver\"");
            let _ = writeln!(out, "\t\"fmt\"");
            let _ = writeln!(out, ")");
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "type {ty} string");
        let _ = writeln!(out);
        let _ = writeln!(out, "const (");
        for value in &decl.values {
            let _ = writeln!(out, "\t{ty}{value} {ty} = \"{value}\"");
        }
        let _ = writeln!(out, ")");
        let _ = writeln!(out);

        let _ = writeln!(out, "func (e {ty}) IsValid() bool {{");
        let _ = writeln!(out, "\tfor _, val := range e.ValidValues() {{");
        let _ = writeln!(out, "\t\tif val == string(e) {{");
        let _ = writeln!(out, "\t\t\treturn true");
        let _ = writeln!(out, "\t\t}}");
        let _ = writeln!(out, "\t}}");
        let _ = writeln!(out, "\treturn false");
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);

        let _ = writeln!(out, "func (e {ty}) ValidValues() []string {{");
        let _ = writeln!(out, "\treturn []string{{");
        for value in &decl.values {
            let _ = writeln!(out, "\t\t\"{value}\",");
        }
        let _ = writeln!(out, "\t}}");
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);

        let _ = writeln!(out, "func (e *{ty}) Scan(src interface{{}}) error {{");
        let _ = writeln!(out, "\tsource, ok := src.(string)");
        let _ = writeln!(out, "\tif !ok {{");
        let _ = writeln!(
            out,
            "\t\treturn fmt.Errorf(\"invalid value for {ty}: %v\", src)"
        );
        let _ = writeln!(out, "\t}}");
        let _ = writeln!(out, "\t*e = {ty}(source)");
        let _ = writeln!(out, "\treturn nil");
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);

        let _ = writeln!(out, "func (e {ty}) Value() (driver.Value, error) {{");
        let _ = writeln!(out, "\tif !e.IsValid() {{");
        let _ = writeln!(
            out,
            "\t\treturn nil, fmt.Errorf(\"invalid value for {ty}\")"
        );
        let _ = writeln!(out, "\t}}");
        let _ = writeln!(out, "\treturn string(e), nil");
        let _ = writeln!(out, "}}");
        let _ = writeln!(out);

        Ok(out)
    }

    fn empty_unit(&self) -> String {
        format!("package {}\n", self.package)
    }
}

//! Pipeline driver: scan, extract, render.

use log::debug;

use crate::emit::Render;
use crate::errors::EmitError;
use crate::extract::Extractor;
use crate::scanner::Scanner;
use crate::types::Strictness;

/// Result of one generation run.
#[derive(Debug)]
pub struct Generated {
    /// Finished output artifact.
    pub code: String,
    /// Number of enum declarations rendered.
    pub count: usize,
}

/// Run the full pipeline over `schema`, rendering every recognized
/// `CREATE TYPE ... AS ENUM` declaration with `renderer`.
///
/// Declarations are rendered in input order; only the first one renders the
/// backend's shared preamble. A schema with no recognized declarations
/// produces the backend's minimal empty unit.
pub fn generate(
    schema: &str,
    renderer: &dyn Render,
    strictness: Strictness,
) -> Result<Generated, EmitError> {
    let extractor = Extractor::new(strictness);
    let mut code = String::new();
    let mut count = 0usize;

    for block in Scanner::with_strictness(schema, strictness) {
        let Some(decl) = extractor.extract(&block) else {
            debug!("statement is not an enum declaration, skipping");
            continue;
        };
        debug!("rendering {} with {} values", decl.name, decl.values.len());
        code.push_str(&renderer.render(&decl, count == 0)?);
        count += 1;
    }

    if count == 0 {
        return Ok(Generated {
            code: renderer.empty_unit(),
            count: 0,
        });
    }

    let code = renderer.finish(code)?;
    Ok(Generated { code, count })
}

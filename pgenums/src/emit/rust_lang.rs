//! Rust rendering backend.

use heck::ToShoutySnakeCase;
use proc_macro2::TokenStream;
use quote::quote;

use crate::errors::EmitError;
use crate::types::EnumDecl;

use super::Render;

/// Renders declarations as Rust source: a newtype over `String` with one
/// `&'static str` constant per value plus validity and conversion helpers.
///
/// `finish` parses the concatenated output and pretty-prints it, so an
/// invalid render surfaces as a fault instead of a broken artifact.
#[derive(Default)]
pub struct RustRenderer;

impl RustRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn parse_ident(name: &str, type_name: &str) -> Result<syn::Ident, EmitError> {
    syn::parse_str(name).map_err(|_| EmitError::Render {
        type_name: type_name.to_string(),
        message: format!("{name:?} is not a usable Rust identifier"),
    })
}

impl Render for RustRenderer {
    fn render(&self, decl: &EnumDecl, first: bool) -> Result<String, EmitError> {
        let ty = parse_ident(&decl.name, &decl.name)?;

        let mut consts = TokenStream::new();
        for value in &decl.values {
            let const_name = parse_ident(&value.to_shouty_snake_case(), &decl.name)?;
            consts.extend(quote! {
                pub const #const_name: &'static str = #value;
            });
        }

        let values = &decl.values;
        let preamble = if first {
            quote! {
                //! Code generated by pgenums; DO NOT EDIT.
                #![allow(dead_code)]
            }
        } else {
            TokenStream::new()
        };

        let block = quote! {
            #preamble

            #[derive(Debug, Clone, PartialEq, Eq)]
            pub struct #ty(String);

            impl #ty {
                #consts

                /// Every value this type accepts.
                pub fn valid_values() -> &'static [&'static str] {
                    &[#(#values),*]
                }

                pub fn is_valid(&self) -> bool {
                    Self::valid_values().contains(&self.0.as_str())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl ::std::convert::From<String> for #ty {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl ::std::fmt::Display for #ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        };

        Ok(block.to_string())
    }

    fn empty_unit(&self) -> String {
        "//! Code generated by pgenums; DO NOT EDIT.\n".to_string()
    }

    fn finish(&self, source: String) -> Result<String, EmitError> {
        let file = syn::parse_file(&source).map_err(|err| EmitError::InvalidOutput {
            language: "Rust",
            message: err.to_string(),
        })?;
        Ok(prettyplease::unparse(&file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl() -> EnumDecl {
        EnumDecl {
            name: "OrderStatus".to_string(),
            values: vec!["OnHold".to_string(), "Done".to_string()],
        }
    }

    fn render_finished(decls: &[EnumDecl]) -> String {
        let renderer = RustRenderer::new();
        let mut source = String::new();
        for (index, decl) in decls.iter().enumerate() {
            source.push_str(&renderer.render(decl, index == 0).unwrap());
        }
        renderer.finish(source).unwrap()
    }

    #[test]
    fn renders_a_parseable_newtype_with_constants() {
        let out = render_finished(&[decl()]);
        assert!(out.contains("pub struct OrderStatus(String)"));
        assert!(out.contains("pub const ON_HOLD: &'static str = \"OnHold\""));
        assert!(out.contains("pub const DONE: &'static str = \"Done\""));
        assert!(out.contains("pub fn valid_values()"));
        assert!(out.contains("pub fn is_valid(&self)"));
    }

    #[test]
    fn preamble_appears_only_once() {
        let second = EnumDecl {
            name: "Color".to_string(),
            values: vec!["Red".to_string()],
        };
        let out = render_finished(&[decl(), second]);
        assert_eq!(out.matches("DO NOT EDIT").count(), 1);
        assert!(out.contains("pub struct Color(String)"));
    }

    #[test]
    fn an_empty_value_identifier_is_a_render_fault() {
        let bad = EnumDecl {
            name: "Status".to_string(),
            values: vec!["Active".to_string(), String::new()],
        };
        let err = RustRenderer::new().render(&bad, true).unwrap_err();
        assert!(matches!(err, EmitError::Render { .. }));
    }

    #[test]
    fn unparseable_output_is_an_invalid_output_fault() {
        let err = RustRenderer::new()
            .finish("pub struct {".to_string())
            .unwrap_err();
        assert!(matches!(err, EmitError::InvalidOutput { .. }));
    }

    #[test]
    fn empty_unit_parses_as_a_rust_file() {
        assert!(syn::parse_file(&RustRenderer::new().empty_unit()).is_ok());
    }
}

//! Registry marker extraction.
//!
//! Finds the Glint registry augmentation in a single source file:
//!
//! ```ts
//! declare module '@glint/environment-ember-loose/registry' {
//!   export default interface Registry {
//!     'my-component': typeof MyComponent;
//!   }
//! }
//! ```
//!
//! and turns every property of `Registry` into a [`RegistryMember`].
//! Files without such a block yield no members. Any other shape inside
//! `Registry` is an [`ExtractError::UnexpectedShape`].

use swc_ecma_ast::{
    Expr, Lit, TsEntityName, TsInterfaceBody, TsInterfaceDecl, TsModuleDecl, TsModuleName,
    TsPropertySignature, TsType, TsTypeElement, TsTypeQueryExpr,
};
use swc_ecma_visit::{Visit, VisitWith};
use thiserror::Error;

use crate::config::{REGISTRY_INTERFACE, REGISTRY_MODULE};
use crate::core::parsers::ts::{ParseFailure, ParsedSource, parse_ts_source};


/// A string key exposed by the registry and the type it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryMember {
    pub name: String,
    pub type_name: String,
}

impl RegistryMember {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("failed to parse source at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unexpected {found} in `Registry` at line {line}, expected {expected}")]
    UnexpectedShape {
        line: usize,
        expected: &'static str,
        found: String,
    },
}

impl From<ParseFailure> for ExtractError {
    fn from(failure: ParseFailure) -> Self {
        ExtractError::Parse {
            line: failure.line,
            message: failure.message,
        }
    }
}

/// Extract the registry members declared in one file, in declaration order.
///
/// `file_name` only selects the syntax (`.tsx` enables JSX).
pub fn extract_registry_members(
    code: &str,
    file_name: &str,
) -> Result<Vec<RegistryMember>, ExtractError> {
    let parsed = parse_ts_source(code, file_name)?;

    let mut visitor = MarkerVisitor::new(&parsed);
    parsed.module.visit_with(&mut visitor);
    visitor.finish()
}

/// Walks module-level augmentations, descending only into the registry module.
struct MarkerVisitor<'a> {
    source: &'a ParsedSource,
    members: Vec<RegistryMember>,
    error: Option<ExtractError>,
}

impl<'a> MarkerVisitor<'a> {
    fn new(source: &'a ParsedSource) -> Self {
        Self {
            source,
            members: Vec::new(),
            error: None,
        }
    }

    fn finish(self) -> Result<Vec<RegistryMember>, ExtractError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.members),
        }
    }
}

impl Visit for MarkerVisitor<'_> {
    fn visit_ts_module_decl(&mut self, node: &TsModuleDecl) {
        if self.error.is_some() || !is_registry_module(&node.id) {
            return;
        }

        let Some(body) = &node.body else {
            return;
        };

        let mut finder = RegistryInterfaceFinder {
            source: self.source,
            members: &mut self.members,
            error: &mut self.error,
        };
        body.visit_with(&mut finder);
    }
}

fn is_registry_module(id: &TsModuleName) -> bool {
    match id {
        TsModuleName::Str(specifier) => specifier.value.as_str() == Some(REGISTRY_MODULE),
        TsModuleName::Ident(_) => false,
    }
}

/// Looks for `interface Registry` anywhere inside a registry module block.
struct RegistryInterfaceFinder<'a, 'v> {
    source: &'a ParsedSource,
    members: &'v mut Vec<RegistryMember>,
    error: &'v mut Option<ExtractError>,
}

impl Visit for RegistryInterfaceFinder<'_, '_> {
    fn visit_ts_interface_decl(&mut self, node: &TsInterfaceDecl) {
        if self.error.is_some() || node.id.sym.as_str() != REGISTRY_INTERFACE {
            return;
        }

        match interface_members(self.source, &node.body) {
            Ok(members) => self.members.extend(members),
            Err(err) => *self.error = Some(err),
        }
    }
}

fn interface_members(
    source: &ParsedSource,
    body: &TsInterfaceBody,
) -> Result<Vec<RegistryMember>, ExtractError> {
    body.body
        .iter()
        .map(|element| match element {
            TsTypeElement::TsPropertySignature(prop) => property_member(source, prop),
            other => Err(ExtractError::UnexpectedShape {
                line: source.line_of(other),
                expected: "a property signature",
                found: describe_element(other).to_string(),
            }),
        })
        .collect()
}

fn property_member(
    source: &ParsedSource,
    prop: &TsPropertySignature,
) -> Result<RegistryMember, ExtractError> {
    let line = source.line_of(prop);

    let name = match &*prop.key {
        Expr::Lit(Lit::Str(key)) => key.value.as_str().map(str::to_string),
        Expr::Ident(ident) if !prop.computed => Some(ident.sym.to_string()),
        _ => None,
    }
    .ok_or_else(|| ExtractError::UnexpectedShape {
        line,
        expected: "a string or identifier key",
        found: "property key".to_string(),
    })?;

    let unexpected_type = |found: &str| ExtractError::UnexpectedShape {
        line,
        expected: "a `typeof Identifier` annotation",
        found: format!("{found} for '{name}'"),
    };

    let Some(type_ann) = &prop.type_ann else {
        return Err(unexpected_type("missing type annotation"));
    };

    let type_name = match &*type_ann.type_ann {
        TsType::TsTypeQuery(query) if query.type_args.is_none() => match &query.expr_name {
            TsTypeQueryExpr::TsEntityName(TsEntityName::Ident(ident)) => ident.sym.to_string(),
            TsTypeQueryExpr::TsEntityName(TsEntityName::TsQualifiedName(_)) => {
                return Err(unexpected_type("qualified name"));
            }
            _ => return Err(unexpected_type("type query")),
        },
        TsType::TsTypeQuery(_) => return Err(unexpected_type("instantiated type query")),
        TsType::TsTypeRef(_) => return Err(unexpected_type("type reference without `typeof`")),
        TsType::TsKeywordType(_) => return Err(unexpected_type("keyword type")),
        _ => return Err(unexpected_type("type annotation")),
    };

    Ok(RegistryMember { name, type_name })
}

fn describe_element(element: &TsTypeElement) -> &'static str {
    match element {
        TsTypeElement::TsPropertySignature(_) => "property signature",
        TsTypeElement::TsMethodSignature(_) => "method signature",
        TsTypeElement::TsIndexSignature(_) => "index signature",
        TsTypeElement::TsCallSignatureDecl(_) => "call signature",
        TsTypeElement::TsConstructSignatureDecl(_) => "construct signature",
        TsTypeElement::TsGetterSignature(_) => "getter signature",
        TsTypeElement::TsSetterSignature(_) => "setter signature",
    }
}

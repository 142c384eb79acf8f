use std::sync::Arc;

use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parse failure, located by 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub message: String,
}

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

impl ParsedSource {
    /// 1-based line of a node in this source.
    pub fn line_of(&self, node: &impl Spanned) -> usize {
        self.source_map.lookup_char_pos(node.span().lo).line
    }
}

/// Parse TypeScript source code into an AST.
///
/// TSX is only enabled for `.tsx` files so that angle-bracket type assertions
/// in plain `.ts` files keep parsing. Decorators are always on, Ember classes
/// rely on them.
pub fn parse_ts_source(code: &str, file_name: &str) -> Result<ParsedSource, ParseFailure> {
    let source_map: Arc<SourceMap> = Default::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Real(file_name.into()).into(),
            code.to_string(),
        );

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: file_name.ends_with(".tsx"),
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser.parse_module().map_err(|e| ParseFailure {
            line: source_map.lookup_char_pos(e.span().lo).line,
            message: e.kind().msg().to_string(),
        })?;

        Ok(ParsedSource { module, source_map })
    })
}

pub mod enumerator;
pub mod locator;
pub mod resolver;
pub mod unwinder;

use tree_sitter::Node;

use crate::dialects::Dialect;
use crate::models::{ExtractOptions, ModuleSurface};
use crate::parser::Parser;

/// Current best guess at the module's sole exported value, narrowing as it
/// moves through the pipeline. Absence is modelled as `None` at the
/// pipeline level, so unsupported shapes fall through the `Other` arm.
#[derive(Debug, Clone, Copy)]
pub enum ExportCandidate<'tree> {
    ClassLike(Node<'tree>),
    ObjectLiteral(Node<'tree>),
    Identifier(Node<'tree>),
    ChainedAssignment(Node<'tree>),
    Other(Node<'tree>),
}

impl<'tree> ExportCandidate<'tree> {
    pub fn classify(node: Node<'tree>) -> Self {
        match node.kind() {
            "class_declaration" | "abstract_class_declaration" | "class" => {
                ExportCandidate::ClassLike(node)
            }
            "object" => ExportCandidate::ObjectLiteral(node),
            "identifier" => ExportCandidate::Identifier(node),
            "assignment_expression" => ExportCandidate::ChainedAssignment(node),
            _ => ExportCandidate::Other(node),
        }
    }

    pub fn node(&self) -> Node<'tree> {
        match self {
            ExportCandidate::ClassLike(node)
            | ExportCandidate::ObjectLiteral(node)
            | ExportCandidate::Identifier(node)
            | ExportCandidate::ChainedAssignment(node)
            | ExportCandidate::Other(node) => *node,
        }
    }
}

/// Extract the public method surface of the module's sole export using
/// default options.
pub fn extract(source: &str) -> Option<ModuleSurface> {
    extract_with(source, &ExtractOptions::default())
}

/// Extract the public method surface of the module's sole export.
///
/// Every failure mode collapses to `None`: unparsable source, no usable
/// export, an unresolvable name, an over-deep assignment chain, or an
/// export that is neither a class nor an object literal.
pub fn extract_with(source: &str, options: &ExtractOptions) -> Option<ModuleSurface> {
    let source = source.trim();
    let dialect = Dialect::for_filename(&options.filename);

    let parsed = match Parser::new().parse_source(source, dialect) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!("Parse failed for {}: {}", options.filename, err);
            return None;
        }
    };
    if parsed.has_errors() {
        tracing::debug!(
            "Syntax errors in {} ({}), no exports determined",
            options.filename,
            options.script_target.as_str()
        );
        return None;
    }

    let mut candidate = locator::locate(&parsed)?;
    let mut resolved = false;

    if let ExportCandidate::Identifier(node) = candidate {
        candidate = resolver::resolve(&parsed, parsed.node_text(&node))?;
        resolved = true;
    }

    if let ExportCandidate::ChainedAssignment(node) = candidate {
        candidate = unwinder::unwind(node, 0)?;

        // A CommonJS chain usually ends in a bare name
        // (`module.exports = exports = UserController`); give it the one
        // permitted resolution pass if that pass has not been spent yet.
        if !resolved {
            if let ExportCandidate::Identifier(node) = candidate {
                candidate = resolver::resolve(&parsed, parsed.node_text(&node))?;
            }
        }
    }

    enumerator::enumerate(&parsed, candidate)
}

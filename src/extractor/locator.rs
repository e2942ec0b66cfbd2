use tree_sitter::Node;

use super::ExportCandidate;
use crate::parser::ParsedSource;

/// Locate the module's single exported value among the top-level
/// statements. The first statement matching either export form wins;
/// later matching statements are ignored.
pub fn locate<'tree>(parsed: &'tree ParsedSource) -> Option<ExportCandidate<'tree>> {
    let root = parsed.root_node();
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        if let Some(value) = match_commonjs(parsed, statement).or_else(|| match_esm(statement)) {
            return Some(ExportCandidate::classify(value));
        }
    }

    tracing::trace!("No module-level export statement found");
    None
}

/// `module.exports = X` or `exports = X`; the candidate is the right-hand
/// side expression.
fn match_commonjs<'tree>(parsed: &ParsedSource, statement: Node<'tree>) -> Option<Node<'tree>> {
    if statement.kind() != "expression_statement" {
        return None;
    }
    let assignment = statement.named_child(0)?;
    if assignment.kind() != "assignment_expression" {
        return None;
    }

    let left = assignment.child_by_field_name("left")?;
    if !is_exports_target(parsed, left) {
        return None;
    }

    assignment.child_by_field_name("right")
}

fn is_exports_target(parsed: &ParsedSource, left: Node) -> bool {
    match left.kind() {
        "identifier" => parsed.node_text(&left) == "exports",
        "member_expression" => {
            let Some(object) = left.child_by_field_name("object") else {
                return false;
            };
            let Some(property) = left.child_by_field_name("property") else {
                return false;
            };
            object.kind() == "identifier"
                && parsed.node_text(&object) == "module"
                && parsed.node_text(&property) == "exports"
        }
        _ => false,
    }
}

/// `export default X` (expression or declaration form) and the TypeScript
/// `export = X` assignment. Named exports never match: the `default` and
/// `=` markers are direct children of the export statement, so markers
/// nested inside an export clause (`export { a as default }`) are not
/// seen here.
fn match_esm(statement: Node<'_>) -> Option<Node<'_>> {
    if statement.kind() != "export_statement" {
        return None;
    }

    let mut cursor = statement.walk();
    let marked = statement
        .children(&mut cursor)
        .any(|child| !child.is_named() && matches!(child.kind(), "default" | "="));
    if !marked {
        return None;
    }

    if let Some(value) = statement.child_by_field_name("value") {
        return Some(value);
    }
    if let Some(declaration) = statement.child_by_field_name("declaration") {
        return Some(declaration);
    }

    // `export = X` carries the expression as a plain named child.
    let mut cursor = statement.walk();
    let result = statement
        .named_children(&mut cursor)
        .find(|child| !child.kind().contains("comment"));
    result
}

use tree_sitter::Node;

use super::ExportCandidate;
use crate::parser::ParsedSource;

/// Resolve a bare exported name to the top-level declaration that binds
/// it: a class declaration with that name, or a variable declarator whose
/// initializer becomes the new candidate. One in-order scan, first
/// structural match wins; there is no recursive re-resolution of a name
/// that resolves to another name.
pub fn resolve<'tree>(parsed: &'tree ParsedSource, name: &str) -> Option<ExportCandidate<'tree>> {
    let root = parsed.root_node();
    let mut cursor = root.walk();

    for statement in root.named_children(&mut cursor) {
        match statement.kind() {
            "class_declaration" | "abstract_class_declaration" => {
                let Some(class_name) = statement.child_by_field_name("name") else {
                    continue;
                };
                if parsed.node_text(&class_name) == name {
                    return Some(ExportCandidate::classify(statement));
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                if let Some(declarator) = find_declarator(parsed, statement, name) {
                    // An uninitialized binding ends the resolution; the
                    // scan does not continue past the first match.
                    return declarator
                        .child_by_field_name("value")
                        .map(ExportCandidate::classify);
                }
            }
            _ => {}
        }
    }

    tracing::trace!("No top-level declaration found for exported name {}", name);
    None
}

fn find_declarator<'tree>(
    parsed: &ParsedSource,
    statement: Node<'tree>,
    name: &str,
) -> Option<Node<'tree>> {
    let mut cursor = statement.walk();
    let result = statement
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "variable_declarator")
        .find(|declarator| {
            declarator
                .child_by_field_name("name")
                .is_some_and(|bound| parsed.node_text(&bound) == name)
        });
    result
}

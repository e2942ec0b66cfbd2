use tree_sitter::Node;

use super::ExportCandidate;
use crate::models::{ExportKind, MethodRecord, ModuleSurface};
use crate::parser::ParsedSource;

/// View over a single class or object member, answering the shape and
/// visibility questions the enumerator asks without leaking grammar
/// details into the collection loops.
struct MethodMember<'tree> {
    node: Node<'tree>,
}

impl<'tree> MethodMember<'tree> {
    /// Wraps method-shaped members only. Fields, overload signatures,
    /// abstract signatures, and static blocks are rejected here.
    fn from_node(node: Node<'tree>) -> Option<Self> {
        if node.kind() == "method_definition" {
            Some(Self { node })
        } else {
            None
        }
    }

    /// Getter and setter definitions share the method node kind; the
    /// `get`/`set` markers are anonymous children.
    fn is_accessor(&self) -> bool {
        let mut cursor = self.node.walk();
        let result = self
            .node
            .children(&mut cursor)
            .any(|child| !child.is_named() && matches!(child.kind(), "get" | "set"));
        result
    }

    /// Plain member name. Computed names, private `#name` identifiers, and
    /// string or numeric keys yield `None`.
    fn simple_name(&self, parsed: &'tree ParsedSource) -> Option<&'tree str> {
        let name = self.node.child_by_field_name("name")?;
        if name.kind() != "property_identifier" {
            return None;
        }
        Some(parsed.node_text(&name))
    }

    /// True when the member carries a `private`/`protected` accessibility
    /// modifier or an ECMAScript `#name` private name.
    fn is_non_public(&self, parsed: &ParsedSource) -> bool {
        if let Some(name) = self.node.child_by_field_name("name") {
            if name.kind() == "private_property_identifier" {
                return true;
            }
        }

        let mut cursor = self.node.walk();
        let result = self.node.children(&mut cursor).any(|child| {
            child.kind() == "accessibility_modifier"
                && matches!(parsed.node_text(&child), "private" | "protected")
        });
        result
    }

    fn lineno(&self, parsed: &ParsedSource) -> u32 {
        parsed.line_of(&self.node)
    }
}

/// Enumerate the method surface of the final export candidate. Anything
/// that is not a class or an object literal has no method surface.
pub fn enumerate<'tree>(
    parsed: &'tree ParsedSource,
    candidate: ExportCandidate<'tree>,
) -> Option<ModuleSurface> {
    match candidate {
        ExportCandidate::ClassLike(node) => {
            let body = node.child_by_field_name("body")?;
            Some(ModuleSurface::new(
                ExportKind::Class,
                class_methods(parsed, body),
            ))
        }
        ExportCandidate::ObjectLiteral(node) => Some(ModuleSurface::new(
            ExportKind::Object,
            object_methods(parsed, node),
        )),
        ExportCandidate::Identifier(_)
        | ExportCandidate::ChainedAssignment(_)
        | ExportCandidate::Other(_) => None,
    }
}

/// Named public methods of a class body, in declaration order. The
/// constructor never counts as part of the method surface.
fn class_methods<'tree>(parsed: &'tree ParsedSource, body: Node<'tree>) -> Vec<MethodRecord> {
    let mut methods = Vec::new();
    let mut cursor = body.walk();

    for child in body.named_children(&mut cursor) {
        let Some(member) = MethodMember::from_node(child) else {
            continue;
        };
        if member.is_accessor() || member.is_non_public(parsed) {
            continue;
        }
        let Some(name) = member.simple_name(parsed) else {
            continue;
        };
        if name == "constructor" {
            continue;
        }
        methods.push(MethodRecord::new(name, member.lineno(parsed)));
    }

    methods
}

/// Named shorthand methods of an object literal, in declaration order.
/// Object properties carry no access modifiers, so no visibility filter
/// applies.
fn object_methods<'tree>(parsed: &'tree ParsedSource, object: Node<'tree>) -> Vec<MethodRecord> {
    let mut methods = Vec::new();
    let mut cursor = object.walk();

    for child in object.named_children(&mut cursor) {
        let Some(member) = MethodMember::from_node(child) else {
            continue;
        };
        if member.is_accessor() {
            continue;
        }
        let Some(name) = member.simple_name(parsed) else {
            continue;
        };
        methods.push(MethodRecord::new(name, member.lineno(parsed)));
    }

    methods
}

use tree_sitter::Node;

use super::ExportCandidate;

/// Maximum number of assignment hops followed when the exported value is a
/// chained assignment (`module.exports = exports = X`). Chains needing
/// more hops are abandoned rather than resolved.
pub const MAX_ASSIGNMENT_HOPS: u8 = 3;

/// Walk the right-hand branch of a chained assignment until something that
/// is not an assignment remains, bounded by [`MAX_ASSIGNMENT_HOPS`].
pub fn unwind(expr: Node<'_>, depth: u8) -> Option<ExportCandidate<'_>> {
    if depth >= MAX_ASSIGNMENT_HOPS {
        tracing::trace!("Assignment chain exceeds {} hops", MAX_ASSIGNMENT_HOPS);
        return None;
    }

    if expr.kind() == "assignment_expression" {
        let right = expr.child_by_field_name("right")?;
        return unwind(right, depth + 1);
    }

    Some(ExportCandidate::classify(expr))
}

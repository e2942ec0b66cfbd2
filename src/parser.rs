use crate::dialects::Dialect;
use crate::error::{ExtractError, Result};

pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_source(&self, source: &str, dialect: Dialect) -> Result<ParsedSource> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&dialect.language())?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Parse("Failed to parse source".to_string()))?;

        Ok(ParsedSource {
            tree,
            source: source.to_string(),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ParsedSource {
    tree: tree_sitter::Tree,
    source: String,
}

impl ParsedSource {
    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    pub fn node_text(&self, node: &tree_sitter::Node) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }

    /// 1-based line of the node's starting position.
    pub fn line_of(&self, node: &tree_sitter::Node) -> u32 {
        node.start_position().row as u32 + 1
    }

    /// tree-sitter recovers from bad syntax instead of failing outright, so
    /// a tree containing ERROR or MISSING nodes counts as unparsable.
    pub fn has_errors(&self) -> bool {
        self.root_node().has_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParsedSource {
        Parser::new()
            .parse_source(source, Dialect::TypeScript)
            .unwrap()
    }

    #[test]
    fn test_parse_source_typescript() {
        let parsed = parse("class UserController {}\n");
        assert_eq!(parsed.root_node().kind(), "program");
        assert!(parsed.root_node().child_count() > 0);
    }

    #[test]
    fn test_parse_source_empty() {
        let parsed = parse("");
        assert_eq!(parsed.source(), "");
        assert!(!parsed.has_errors());
    }

    #[test]
    fn test_parse_source_tsx() {
        let parsed = Parser::new()
            .parse_source("const el = <div />;\n", Dialect::Tsx)
            .unwrap();
        assert!(!parsed.has_errors());
    }

    #[test]
    fn test_node_text() {
        let source = "class UserController {}";
        let parsed = parse(source);
        let root = parsed.root_node();
        assert_eq!(parsed.node_text(&root), source);
    }

    #[test]
    fn test_line_of_is_one_based() {
        let parsed = parse("const a = 1;\nclass B {}\n");
        let root = parsed.root_node();
        let first = root.named_child(0).unwrap();
        let second = root.named_child(1).unwrap();
        assert_eq!(parsed.line_of(&first), 1);
        assert_eq!(parsed.line_of(&second), 2);
    }

    #[test]
    fn test_has_errors_on_unbalanced_braces() {
        let parsed = parse("class Broken {\n  index() {\n");
        assert!(parsed.has_errors());
    }

    #[test]
    fn test_has_errors_on_valid_source() {
        let parsed = parse("module.exports = { index() {} };\n");
        assert!(!parsed.has_errors());
    }
}

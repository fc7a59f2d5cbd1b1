//! Plain-text tree dumps for tests and the CLI.

use rowan::NodeOrToken;

use crate::syntax_kind::SyntaxNode;

/// Render a tree as an indented kind listing, token text quoted.
///
/// ```text
/// ROOT
///   TAG_BLOCK
///     TEXT_LITERAL
///       LT "<"
///       TEXT "img"
///     TEXT_LITERAL
///       GT ">"
/// ```
///
/// Deliberately range-free so dumps compare stably across otherwise equal
/// trees; byte offsets are available from rowan's own `{:#?}` output.
pub fn dump_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out.truncate(out.trim_end().len());
    out
}

fn write_node(node: &SyntaxNode, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);
    out.push_str(&format!("{prefix}{:?}\n", node.kind()));

    for child in node.children_with_tokens() {
        match child {
            NodeOrToken::Node(n) => write_node(&n, indent + 1, out),
            NodeOrToken::Token(t) => {
                out.push_str(&format!("{prefix}  {:?} {:?}\n", t.kind(), t.text()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn dump_simple_tag() {
        let expected = "\
ROOT
  TAG_BLOCK
    TEXT_LITERAL
      LT \"<\"
      TEXT \"br\"
    TEXT_LITERAL
      GT \">\"";
        assert_eq!(dump_tree(&parse("<br>")), expected);
    }

    #[test]
    fn dump_escapes_token_text() {
        let dump = dump_tree(&parse("a\nb"));
        assert!(dump.contains("NEWLINE \"\\n\""));
    }
}

//! The element builder: folds flat tag-block runs into nested ELEMENT nodes.
//!
//! One forward scan per composite node. Start tags open a frame on a local
//! stack; siblings accumulate into the innermost open frame; end tags close
//! frames. Anomalies never fail, they just pick a recovery shape:
//!
//! - blank tag name, void tag, self-closing tag → standalone element, no body
//! - end tag matching a non-innermost frame → the frames opened after the
//!   match are force-closed as start-only elements; their accumulated
//!   children stay behind as following siblings
//! - end tag matching nothing → startless element wrapping just the end tag
//! - start tag still open when the scan ends → element with no end tag whose
//!   body is everything after the start tag
//!
//! The scan stack is strictly local to one node's child list; nested
//! composites get their own independent scan. Tag blocks that are already
//! sitting inside an ELEMENT are never regrouped, which makes the pass
//! idempotent.

use rowan::{GreenNode, NodeOrToken};

use super::{GreenElement, green_of};
use crate::document::ParseOptions;
use crate::syntax_kind::{SyntaxKind, SyntaxNode};
use crate::tags::TagBlock;

/// Group matching tag blocks into ELEMENT nodes, at every nesting level.
///
/// Total and lossless: the output tree carries exactly the input's leaf
/// tokens, in order. Running the pass on its own output is a no-op.
pub fn rewrite(tree: &SyntaxNode) -> SyntaxNode {
    rewrite_with(tree, &ParseOptions::default())
}

/// [`rewrite`] with explicit options (extra void tag names).
pub fn rewrite_with(tree: &SyntaxNode, options: &ParseOptions) -> SyntaxNode {
    SyntaxNode::new_root(build_node(tree, options))
}

/// An open start tag awaiting its end tag during one scan.
struct OpenTag {
    start: GreenNode,
    name: String,
    body: Vec<GreenElement>,
}

/// The list new children are currently flowing into: the innermost open
/// frame's body, or the finished output when no frame is open.
fn sink<'a>(out: &'a mut Vec<GreenElement>, open: &'a mut Vec<OpenTag>) -> &'a mut Vec<GreenElement> {
    match open.last_mut() {
        Some(frame) => &mut frame.body,
        None => out,
    }
}

fn build_node(node: &SyntaxNode, options: &ParseOptions) -> GreenNode {
    match node.kind() {
        // Leaf-like composites: nothing to regroup below them
        SyntaxKind::TAG_BLOCK | SyntaxKind::TEXT_LITERAL => node.green().into_owned(),
        // Already built: keep the tags, descend into the body only
        SyntaxKind::ELEMENT => build_element(node, options),
        _ => GreenNode::new(node.kind().into(), group_children(node, options)),
    }
}

/// Rebuild an existing ELEMENT without regrouping its direct children.
fn build_element(node: &SyntaxNode, options: &ParseOptions) -> GreenNode {
    let children: Vec<GreenElement> = node
        .children_with_tokens()
        .map(|child| match child {
            NodeOrToken::Node(n) => NodeOrToken::Node(build_node(&n, options)),
            NodeOrToken::Token(t) => NodeOrToken::Token(t.green().to_owned()),
        })
        .collect();
    GreenNode::new(SyntaxKind::ELEMENT.into(), children)
}

/// One scan over one node's direct children.
fn group_children(node: &SyntaxNode, options: &ParseOptions) -> Vec<GreenElement> {
    let mut out: Vec<GreenElement> = Vec::new();
    let mut open: Vec<OpenTag> = Vec::new();

    for child in node.children_with_tokens() {
        let tag = match &child {
            NodeOrToken::Node(n) => TagBlock::cast(n.clone()),
            NodeOrToken::Token(_) => None,
        };
        let Some(tag) = tag else {
            let rebuilt = match &child {
                NodeOrToken::Node(n) => NodeOrToken::Node(build_node(n, options)),
                token => green_of(token),
            };
            sink(&mut out, &mut open).push(rebuilt);
            continue;
        };

        let green = tag.syntax().green().into_owned();

        if tag.has_blank_name() || is_void(&tag, options) || tag.is_self_closing() {
            let standalone = element(Some(green), Vec::new(), None);
            sink(&mut out, &mut open).push(standalone);
        } else if tag.is_end_tag() {
            close_frames(&mut out, &mut open, &tag.name(), green);
        } else {
            open.push(OpenTag {
                start: green,
                name: tag.name(),
                body: Vec::new(),
            });
        }
    }

    // Unclosed start tags, innermost first, keep their accumulated body so an
    // outer unclosed tag correctly contains the inner element.
    while let Some(unclosed) = open.pop() {
        let elem = element(Some(unclosed.start), unclosed.body, None);
        sink(&mut out, &mut open).push(elem);
    }

    out
}

/// Handle one end tag against the open-frame stack.
fn close_frames(
    out: &mut Vec<GreenElement>,
    open: &mut Vec<OpenTag>,
    name: &str,
    end_tag: GreenNode,
) {
    let Some(pos) = open.iter().rposition(|o| o.name.eq_ignore_ascii_case(name)) else {
        // No opener anywhere in scope: wrap just the end tag
        let orphan = element(None, Vec::new(), Some(end_tag));
        sink(out, open).push(orphan);
        return;
    };

    let mut end = Some(end_tag);
    while open.len() > pos {
        let Some(frame) = open.pop() else { break };
        if open.len() == pos {
            // The matching frame: it owns everything it accumulated
            let elem = element(Some(frame.start), frame.body, end.take());
            sink(out, open).push(elem);
        } else {
            // Opened after the match: force-close as a start-only element;
            // whatever it accumulated stays behind as its siblings
            let elem = element(Some(frame.start), Vec::new(), None);
            let dest = sink(out, open);
            dest.push(elem);
            dest.extend(frame.body);
        }
    }
}

/// Assemble an ELEMENT green node from its three logical slots.
fn element(
    start: Option<GreenNode>,
    body: Vec<GreenElement>,
    end: Option<GreenNode>,
) -> GreenElement {
    let mut children: Vec<GreenElement> = Vec::with_capacity(body.len() + 2);
    if let Some(start) = start {
        children.push(NodeOrToken::Node(start));
    }
    children.extend(body);
    if let Some(end) = end {
        children.push(NodeOrToken::Node(end));
    }
    NodeOrToken::Node(GreenNode::new(SyntaxKind::ELEMENT.into(), children))
}

fn is_void(tag: &TagBlock, options: &ParseOptions) -> bool {
    tag.is_void()
        || options
            .extra_void_tags
            .iter()
            .any(|v| v.eq_ignore_ascii_case(&tag.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::dump_tree;
    use crate::parser::parse;
    use crate::tags::Element;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn build(source: &str) -> SyntaxNode {
        rewrite(&parse(source))
    }

    fn top_elements(tree: &SyntaxNode) -> Vec<Element> {
        tree.children().filter_map(Element::cast).collect()
    }

    #[test]
    fn wraps_matched_pair() {
        let tree = build("<div><span></span></div>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);

        let div = &top[0];
        assert_eq!(div.start_tag().map(|t| t.name()), Some("div".into()));
        assert_eq!(div.end_tag().map(|t| t.name()), Some("div".into()));

        let body = div.body();
        assert_eq!(body.len(), 1);
        let span = Element::cast(body[0].as_node().unwrap().clone()).unwrap();
        assert_eq!(span.start_tag().map(|t| t.name()), Some("span".into()));
        assert!(span.body().is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tree = build("<DIV></div>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].start_tag().map(|t| t.name()), Some("DIV".into()));
        assert_eq!(top[0].end_tag().map(|t| t.name()), Some("div".into()));
    }

    #[test]
    fn overlap_recovery() {
        // `</b>` first force-closes `i`, then matches `b`; the trailing
        // `</i>` is left with no opener.
        let tree = build("<b><i></b></i>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 2);

        let b = &top[0];
        assert_eq!(b.start_tag().map(|t| t.name()), Some("b".into()));
        assert_eq!(b.end_tag().map(|t| t.name()), Some("b".into()));
        let body = b.body();
        assert_eq!(body.len(), 1);
        let i = Element::cast(body[0].as_node().unwrap().clone()).unwrap();
        assert_eq!(i.start_tag().map(|t| t.name()), Some("i".into()));
        assert_eq!(i.end_tag(), None);
        assert!(i.body().is_empty());

        let orphan = &top[1];
        assert_eq!(orphan.start_tag(), None);
        assert_eq!(orphan.end_tag().map(|t| t.name()), Some("i".into()));
        assert!(orphan.body().is_empty());
    }

    #[test]
    fn force_closed_tag_keeps_no_body() {
        // The content after `<i>` stays a sibling of the collapsed `i`
        let tree = build("<b><i>x</b>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);

        let b = &top[0];
        assert_eq!(b.end_tag().map(|t| t.name()), Some("b".into()));
        let body = b.body();
        assert_eq!(body.len(), 2);

        let i = Element::cast(body[0].as_node().unwrap().clone()).unwrap();
        assert_eq!(i.start_tag().map(|t| t.name()), Some("i".into()));
        assert!(i.body().is_empty());
        assert_eq!(i.end_tag(), None);

        assert_eq!(body[1].as_node().map(|n| n.text().to_string()), Some("x".into()));
    }

    #[test]
    fn dangling_end_tag() {
        let tree = build("</div>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].start_tag(), None);
        assert_eq!(top[0].end_tag().map(|t| t.name()), Some("div".into()));
        assert!(top[0].body().is_empty());
    }

    #[rstest]
    #[case("<img>")]
    #[case("<input/>")]
    #[case("<BR>")]
    #[case("<x/>")]
    #[case("<>")]
    fn standalone_shapes(#[case] source: &str) {
        let tree = build(source);
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].end_tag(), None);
        assert!(top[0].body().is_empty());
    }

    #[test]
    fn void_tag_between_siblings() {
        let tree = build("<div>a<img>b</div>");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);

        let body = top[0].body();
        assert_eq!(body.len(), 3);
        let img = Element::cast(body[1].as_node().unwrap().clone()).unwrap();
        assert_eq!(img.start_tag().map(|t| t.name()), Some("img".into()));
        assert_eq!(img.end_tag(), None);
    }

    #[test]
    fn unclosed_start_tag_takes_rest_as_body() {
        let tree = build("<div>text");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].start_tag().map(|t| t.name()), Some("div".into()));
        assert_eq!(top[0].end_tag(), None);

        let body = top[0].body();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].as_node().map(|n| n.text().to_string()), Some("text".into()));
    }

    #[test]
    fn nested_unclosed_tags_close_innermost_first() {
        let tree = build("<a><b>text");
        let top = top_elements(&tree);
        assert_eq!(top.len(), 1);

        let a = &top[0];
        assert_eq!(a.start_tag().map(|t| t.name()), Some("a".into()));
        let a_body = a.body();
        assert_eq!(a_body.len(), 1);

        let b = Element::cast(a_body[0].as_node().unwrap().clone()).unwrap();
        assert_eq!(b.start_tag().map(|t| t.name()), Some("b".into()));
        assert_eq!(b.body().len(), 1);
    }

    #[rstest]
    #[case("<div><span></span></div>")]
    #[case("<b><i></b></i>")]
    #[case("</div>")]
    #[case("<div>text")]
    #[case("text only, no tags")]
    #[case("<a href='x'>link</a> trailing <img> <br/>")]
    #[case("")]
    fn idempotent(#[case] source: &str) {
        let once = build(source);
        let twice = rewrite(&once);
        assert_eq!(dump_tree(&once), dump_tree(&twice));
    }

    #[rstest]
    #[case("<div><span></span></div>")]
    #[case("<b><i>overlap</b></i>")]
    #[case("<ul><li>one<li>two</ul>")]
    #[case("< 6 >= 5 <input value='3/4'/>")]
    fn preserves_all_text(#[case] source: &str) {
        assert_eq!(build(source).text().to_string(), source);
    }

    #[test]
    fn extra_void_tags_option() {
        let options = ParseOptions {
            extra_void_tags: vec!["icon".into()],
        };
        let tree = rewrite_with(&parse("<icon><p></p>"), &options);
        let top = top_elements(&tree);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].start_tag().map(|t| t.name()), Some("icon".into()));
        assert_eq!(top[0].end_tag(), None);
        assert!(top[0].body().is_empty());
    }
}

//! Go declaration parser.
//!
//! Syntax is handled by `tree-sitter-go`; this module only walks the
//! resulting tree:
//! - `package_clause` → `Package` with its doc block
//! - `function_declaration` / `method_declaration` → `Declaration::Function`
//! - `type_declaration` specs → `Declaration::Type`
//! - `const_declaration` / `var_declaration` names → `Declaration::Value`
//!
//! A doc block is the comment group ending on the line directly above a
//! node. Comments sharing a line with the previous token are trailing
//! comments and never part of a doc block.

use crate::error::{Error, Result};
use crate::model::*;
use tree_sitter::{Node, Parser};

/// Parse normalized Go source into a `SourceFile`.
pub fn parse(origin: &str, text: &str) -> Result<SourceFile> {
    let parse_error = |message: String| Error::Parse {
        origin: origin.to_string(),
        message,
    };

    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| parse_error(e.to_string()))?;
    let tree = parser
        .parse(text, None)
        .ok_or_else(|| parse_error("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error(root) {
            Some(node) => {
                let pos = node.start_position();
                format!("syntax error at {}:{}", pos.row + 1, pos.column + 1)
            }
            None => "syntax error".to_string(),
        };
        return Err(parse_error(message));
    }

    let walker = Walker {
        src: text.as_bytes(),
    };
    let mut file = SourceFile {
        origin: origin.to_string(),
        ..Default::default()
    };
    let mut seen_package = false;

    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => {
                seen_package = true;
                file.package = Package {
                    name: walker.package_name(node),
                    doc: walker.doc_block(node),
                };
            }
            "function_declaration" | "method_declaration" => {
                file.declarations.push(Declaration::Function(FunctionDecl {
                    name: walker.field_text(node, "name"),
                    doc: walker.doc_block(node),
                }));
            }
            "type_declaration" => {
                let grouped = is_grouped(node);
                for spec in specs(node) {
                    file.declarations.push(Declaration::Type(TypeDecl {
                        name: walker.field_text(spec, "name"),
                        doc: walker.spec_doc(spec, grouped),
                    }));
                }
            }
            "const_declaration" | "var_declaration" => {
                let kind = if node.kind() == "const_declaration" {
                    StorageKind::Const
                } else {
                    StorageKind::Var
                };
                let grouped = is_grouped(node);
                for spec in specs(node) {
                    let doc = walker.spec_doc(spec, grouped);
                    let mut names = spec.walk();
                    for name in spec.children_by_field_name("name", &mut names) {
                        file.declarations.push(Declaration::Value(ValueDecl {
                            name: walker.text(name).to_string(),
                            kind,
                            doc: doc.clone(),
                        }));
                    }
                }
            }
            _ => {}
        }
    }

    if !seen_package {
        return Err(parse_error("expected 'package' clause".to_string()));
    }

    Ok(file)
}

struct Walker<'a> {
    src: &'a [u8],
}

impl Walker<'_> {
    fn text(&self, node: Node) -> &str {
        node.utf8_text(self.src).unwrap_or_default()
    }

    fn field_text(&self, node: Node, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.text(n).to_string())
            .unwrap_or_default()
    }

    fn package_name(&self, clause: Node) -> String {
        let mut cursor = clause.walk();
        let name = clause
            .named_children(&mut cursor)
            .find(|n| n.kind() == "package_identifier")
            .map(|n| self.text(n).to_string());
        name.unwrap_or_default()
    }

    /// Doc for one spec of a `type`/`const`/`var` declaration.
    ///
    /// Only specs inside a parenthesized group carry a doc block. The comment
    /// above a lone spec's keyword documents the declaration, not the spec.
    fn spec_doc(&self, spec: Node, grouped: bool) -> Option<DocBlock> {
        if grouped {
            self.doc_block(spec)
        } else {
            None
        }
    }

    fn doc_block(&self, node: Node) -> Option<DocBlock> {
        // Walk backwards collecting adjacent comments; the nearest one must
        // end on the line directly above `node`.
        let mut group: Vec<Node> = Vec::new();
        let mut next_start = node.start_position().row;
        let mut prev = node.prev_named_sibling();
        while let Some(comment) = prev.filter(|p| p.kind() == "comment") {
            let end = comment.end_position().row;
            let adjacent = if group.is_empty() {
                end + 1 == next_start
            } else {
                end + 1 >= next_start
            };
            if !adjacent {
                break;
            }
            next_start = comment.start_position().row;
            group.push(comment);
            prev = comment.prev_named_sibling();
        }
        group.reverse();

        // Drop trailing comments of the previous token.
        if let Some(mut row) = group.first().and_then(|c| trailing_anchor(*c)) {
            while group.first().is_some_and(|c| c.start_position().row <= row) {
                row = group.remove(0).end_position().row;
            }
        }

        if group.is_empty() {
            return None;
        }
        Some(DocBlock::new(
            group.iter().map(|c| self.text(*c).to_string()).collect(),
        ))
    }
}

/// Row of the token a comment would trail, if one precedes it.
fn trailing_anchor(comment: Node) -> Option<usize> {
    comment
        .prev_sibling()
        .filter(|p| p.kind() != "\n" && p.kind() != "comment")
        .map(|p| p.end_position().row)
}

/// Whether a declaration uses the parenthesized `( ... )` form.
fn is_grouped(decl: Node) -> bool {
    let mut cursor = decl.walk();
    let grouped = decl
        .children(&mut cursor)
        .any(|c| c.kind() == "(" || c.kind().ends_with("_spec_list"));
    grouped
}

fn specs(decl: Node) -> Vec<Node> {
    let mut out = Vec::new();
    collect_specs(decl, &mut out);
    out
}

fn collect_specs<'t>(node: Node<'t>, out: &mut Vec<Node<'t>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "const_spec" | "var_spec" | "type_spec" | "type_alias" => out.push(child),
            kind if kind.ends_with("_spec_list") => collect_specs(child, out),
            _ => {}
        }
    }
}

fn first_error(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

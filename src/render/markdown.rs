//! Markdown templates, one per declaration kind.
//!
//! Every field of a template is always rendered, empty or not. The only
//! conditional block is the doc part of a declaration, which is skipped
//! when the declaration has no doc block.

use crate::model::*;
use crate::render::{PackageStyle, Section};
use crate::tags::{self, Label, FUNCTION_LABELS, PACKAGE_LABELS};
use tracing::trace;

/// Field order of the tagged package template.
const PACKAGE_FIELDS: &[Label] = &[Label::Description, Label::GitRepository, Label::License];

#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    style: PackageStyle,
}

impl MarkdownRenderer {
    pub fn new(style: PackageStyle) -> Self {
        Self { style }
    }

    /// Render a whole file: package doc first, then declarations in order.
    pub fn render_file(&self, file: &SourceFile) -> Vec<Section> {
        let mut sections = self.render_package(&file.package);
        for decl in &file.declarations {
            trace!(name = decl.name(), documented = decl.doc().is_some(), "rendering");
            sections.extend(render_declaration(decl));
        }
        sections
    }

    fn render_package(&self, package: &Package) -> Vec<Section> {
        let Some(doc) = &package.doc else {
            return Vec::new();
        };

        match self.style {
            PackageStyle::Tagged | PackageStyle::Strict => {
                let extraction = tags::extract(doc, PACKAGE_LABELS);
                let mut sections = Vec::new();
                if self.style == PackageStyle::Tagged {
                    sections.extend(extraction.residual.iter().map(|line| format!("{line}\n")));
                }

                let mut out = format!("# Package: {}\n\n", extraction.tags.get(Label::Package));
                for &label in PACKAGE_FIELDS {
                    out.push_str(&field(label, extraction.tags.get(label)));
                }
                sections.push(out);
                sections
            }
            PackageStyle::Verbatim => {
                let mut out = format!("# {}\n\n", package.name);
                for line in doc.lines() {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push('\n');
                vec![out]
            }
        }
    }
}

fn render_declaration(decl: &Declaration) -> Vec<Section> {
    match decl {
        Declaration::Function(f) => vec![render_function(f)],
        Declaration::Type(t) => vec![with_doc_text(format!("## Type: {}\n\n", t.name), &t.doc)],
        Declaration::Value(v) => vec![with_doc_text(
            format!("## {} ({})\n\n", v.name, v.kind),
            &v.doc,
        )],
    }
}

fn render_function(func: &FunctionDecl) -> Section {
    let mut out = format!("## Function: {}\n\n", func.name);
    if let Some(doc) = &func.doc {
        let extraction = tags::extract(doc, FUNCTION_LABELS);
        for &label in FUNCTION_LABELS {
            out.push_str(&field(label, extraction.tags.get(label)));
        }
    }
    out
}

fn with_doc_text(mut header: String, doc: &Option<DocBlock>) -> Section {
    if let Some(doc) = doc {
        header.push_str(&doc.text());
        header.push_str("\n\n");
    }
    header
}

/// `**Title:** value` followed by a blank line. The value is not trimmed.
fn field(label: Label, value: &str) -> String {
    format!("**{}:** {}\n\n", label.title(), value)
}

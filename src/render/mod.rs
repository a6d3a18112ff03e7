//! Renderer module: Markdown sections and the document they accumulate in.

pub mod markdown;

pub use markdown::MarkdownRenderer;

/// One rendered chunk of Markdown.
pub type Section = String;

/// Package template variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PackageStyle {
    /// Tagged fields, with untagged comment lines passed through.
    #[default]
    Tagged,
    /// Tagged fields only.
    Strict,
    /// Package name header followed by the raw doc comment.
    Verbatim,
}

/// Ordered, append-only sequence of rendered sections.
#[derive(Debug, Default)]
pub struct MarkdownDocument {
    sections: Vec<Section>,
}

impl MarkdownDocument {
    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Join every section into the final output text.
    pub fn into_string(self) -> String {
        self.sections.concat()
    }
}

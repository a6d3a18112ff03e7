//! One run: resolve inputs, render each in order, collect the document.

use crate::config::Config;
use crate::error::Result;
use crate::input::{self, Input};
use crate::parser;
use crate::render::{MarkdownDocument, MarkdownRenderer, Section};
use tracing::{debug, info, warn};

/// Render every input of `config` into one document.
///
/// Read, format and parse failures skip the file; walk errors abort.
pub fn run(config: Config) -> Result<MarkdownDocument> {
    let inputs = input::resolve(config.input, &config.scan)?;
    info!(inputs = inputs.len(), "resolved inputs");

    let renderer = MarkdownRenderer::new(config.style);
    Ok(render_inputs(inputs, &renderer))
}

pub fn render_inputs(inputs: Vec<Input>, renderer: &MarkdownRenderer) -> MarkdownDocument {
    let mut document = MarkdownDocument::default();
    let mut skipped = 0usize;
    for input in inputs {
        let origin = input.origin();
        match render_input(input, renderer) {
            Ok(sections) => {
                debug!(file = %origin, sections = sections.len(), "rendered");
                document.extend(sections);
            }
            Err(e) => {
                warn!("skipping {}", e);
                skipped += 1;
            }
        }
    }
    info!(sections = document.len(), skipped, "document complete");
    document
}

fn render_input(input: Input, renderer: &MarkdownRenderer) -> Result<Vec<Section>> {
    let source = input.read()?;
    let file = parser::parse_source(&source)?;
    debug!(file = %file.origin, declarations = file.declarations.len(), "parsed");
    Ok(renderer.render_file(&file))
}

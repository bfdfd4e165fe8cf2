//! Stack machine turning marker-prefixed lines into nested lists.

use super::marker::{Marker, split_markers};

/// One open level: a container with a current item.
#[derive(Debug, Clone, Copy)]
struct Layer {
    marker: Marker,
    /// Output line holding the item's opening tag.
    item_line: usize,
}

/// Builds one list block from a run of marker lines.
///
/// The builder keeps a stack of open layers, outermost first, and reacts to
/// each line's marker depth:
///
/// - **deeper**: fast-forward, opening one layer per missing level. Every
///   intermediate level is a `:` description wrapper; only the deepest uses
///   the line's own marker.
/// - **same depth**: close the current item and open a sibling. A `;` term
///   followed by a `:` description switches items inside the same `<dl>`.
/// - **shallower**: rewind, closing layers innermost first, then continue as
///   a sibling at the target depth.
///
/// Items without children are closed on their own line (`<li>a</li>`);
/// items with children get their closing tag after the nested container.
///
/// # Example
///
/// ```
/// use wikiml_renderer::ListBuilder;
///
/// let mut builder = ListBuilder::new();
/// builder.push_line("#one");
/// builder.push_line("##nested");
/// builder.push_line("#two");
///
/// assert_eq!(
///     builder.finish(),
///     "<ol>\n<li>one\n<ol>\n<li>nested</li>\n</ol>\n</li>\n<li>two</li>\n</ol>"
/// );
/// ```
#[derive(Debug, Default)]
pub struct ListBuilder {
    layers: Vec<Layer>,
    lines: Vec<String>,
}

impl ListBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open layers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Markers of the open layers, outermost first.
    #[must_use]
    pub fn layers(&self) -> Vec<Marker> {
        self.layers.iter().map(|layer| layer.marker).collect()
    }

    /// Feed the next line of the run.
    ///
    /// A line without markers closes every open layer and is kept verbatim.
    pub fn push_line(&mut self, line: &str) {
        let (markers, content) = split_markers(line);
        let Some(&marker) = markers.last() else {
            self.rewind(0);
            self.lines.push(line.to_owned());
            return;
        };

        let depth = markers.len();
        if depth < self.depth() {
            self.rewind(depth);
        }
        if depth == self.depth() {
            self.sibling(marker, content);
        } else {
            self.fast_forward(&markers, content);
        }
    }

    /// Close every open layer and return the block.
    #[must_use]
    pub fn finish(mut self) -> String {
        self.rewind(0);
        self.lines.join("\n")
    }

    /// Open layers until the stack is as deep as `markers`.
    pub fn fast_forward(&mut self, markers: &[Marker], content: &str) {
        let target = markers.len();
        while self.layers.len() < target {
            let idx = self.layers.len();
            if idx + 1 == target {
                self.open_layer(markers[idx], content);
            } else {
                self.open_layer(Marker::Description, "");
            }
        }
    }

    /// Close layers, innermost first, until `depth` remain.
    pub fn rewind(&mut self, depth: usize) {
        while self.layers.len() > depth {
            if let Some(layer) = self.layers.pop() {
                self.close_item(layer);
                self.lines.push(format!("</{}>", layer.marker.container_tag()));
            }
        }
    }

    /// Replace the innermost item with a new one at the same depth.
    fn sibling(&mut self, marker: Marker, content: &str) {
        let Some(top) = self.layers.pop() else {
            self.open_layer(marker, content);
            return;
        };

        self.close_item(top);
        if top.marker.container_tag() == marker.container_tag() {
            self.open_item(marker, content);
        } else {
            self.lines.push(format!("</{}>", top.marker.container_tag()));
            self.open_layer(marker, content);
        }
    }

    fn open_layer(&mut self, marker: Marker, content: &str) {
        self.lines.push(format!("<{}>", marker.container_tag()));
        self.open_item(marker, content);
    }

    fn open_item(&mut self, marker: Marker, content: &str) {
        let item_line = self.lines.len();
        self.lines.push(format!("<{}>{content}", marker.item_tag()));
        self.layers.push(Layer { marker, item_line });
    }

    fn close_item(&mut self, layer: Layer) {
        let tag = format!("</{}>", layer.marker.item_tag());
        // Childless items close on their own line
        if layer.item_line + 1 == self.lines.len()
            && let Some(line) = self.lines.last_mut()
        {
            line.push_str(&tag);
        } else {
            self.lines.push(tag);
        }
    }
}

/// Build the HTML for one run of list lines.
#[must_use]
pub fn build_list(lines: &[&str]) -> String {
    let mut builder = ListBuilder::new();
    for line in lines {
        builder.push_line(line);
    }
    builder.finish()
}

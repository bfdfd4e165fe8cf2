//! Nested lists.
//!
//! A list block is a maximal run of lines starting with `#`, `*`, `;` or `:`.
//! Each run is handed to a [`ListBuilder`]; lines outside runs are untouched.

mod builder;
mod marker;

pub use builder::{ListBuilder, build_list};
pub use marker::{Marker, split_markers};

fn is_list_line(line: &str) -> bool {
    line.chars().next().and_then(Marker::from_char).is_some()
}

/// Replace every run of list lines in `text` with its HTML.
#[must_use]
pub fn build_lists(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if is_list_line(line) {
            run.push(line);
            continue;
        }
        if !run.is_empty() {
            tracing::trace!(lines = run.len(), "Building list block");
            out.push(build_list(&run));
            run.clear();
        }
        out.push(line.to_owned());
    }
    if !run.is_empty() {
        tracing::trace!(lines = run.len(), "Building list block");
        out.push(build_list(&run));
    }

    out.join("\n")
}

//! List marker characters.

/// Marker opening one level of list nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `#`
    Ordered,
    /// `*`
    Unordered,
    /// `;`
    Term,
    /// `:`
    Description,
}

impl Marker {
    /// Marker for a line-leading character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Self::Ordered),
            '*' => Some(Self::Unordered),
            ';' => Some(Self::Term),
            ':' => Some(Self::Description),
            _ => None,
        }
    }

    /// Tag of the list container this marker opens.
    ///
    /// Terms and descriptions share `dl`.
    #[must_use]
    pub fn container_tag(self) -> &'static str {
        match self {
            Self::Ordered => "ol",
            Self::Unordered => "ul",
            Self::Term | Self::Description => "dl",
        }
    }

    /// Tag of a single item under this marker.
    #[must_use]
    pub fn item_tag(self) -> &'static str {
        match self {
            Self::Ordered | Self::Unordered => "li",
            Self::Term => "dt",
            Self::Description => "dd",
        }
    }
}

/// Split a line into its leading markers and the content after them.
///
/// Leading whitespace of the content is dropped.
#[must_use]
pub fn split_markers(line: &str) -> (Vec<Marker>, &str) {
    let markers: Vec<Marker> = line.chars().map_while(Marker::from_char).collect();
    // Every marker character is one byte
    let content = line[markers.len()..].trim_start();
    (markers, content)
}

use super::DirEntryInfo;

/// Connector glyphs for one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    /// Continuation under an ancestor that still has siblings below it.
    pub vertical: &'static str,
    /// Connector for an entry that is followed by a sibling.
    pub branch: &'static str,
    /// Connector for the last entry of its directory.
    pub corner: &'static str,
    /// Continuation under an ancestor that was the last sibling.
    pub space: &'static str,
}

impl GlyphSet {
    pub const UNICODE: GlyphSet = GlyphSet {
        vertical: "\u{2502}   ",                  // │
        branch: "\u{251c}\u{2500}\u{2500} ",      // ├──
        corner: "\u{2514}\u{2500}\u{2500} ",      // └──
        space: "    ",
    };

    pub const ASCII: GlyphSet = GlyphSet {
        vertical: "|   ",
        branch: "|-- ",
        corner: "\\-- ",
        space: "    ",
    };

    pub fn select(use_ascii: bool) -> GlyphSet {
        if use_ascii {
            GlyphSet::ASCII
        } else {
            GlyphSet::UNICODE
        }
    }

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last {
            self.corner
        } else {
            self.branch
        }
    }

    /// Prefix handed down to the children of an entry.
    pub fn child_prefix(&self, prefix: &str, is_last: bool) -> String {
        let continuation = if is_last { self.space } else { self.vertical };
        format!("{prefix}{continuation}")
    }

    /// Compose the display line for `entry`.
    pub(super) fn line(&self, prefix: &str, is_last: bool, entry: &DirEntryInfo) -> String {
        let suffix = if entry.is_dir() { "/" } else { "" };
        format!("{prefix}{}{}{suffix}", self.connector(is_last), entry.name)
    }
}

//! Well-known service ids.
//!
//! Font drivers publish their optional capabilities under these ids. New ids
//! are added here as constants, never registered at runtime.

/// Multiple Masters / variation font interpolation.
pub const MULTI_MASTERS: &str = "multi-masters";

/// PostScript font name retrieval.
pub const POSTSCRIPT_FONT_NAME: &str = "postscript-font-name";

/// Glyph name dictionary (name to index and back).
pub const GLYPH_DICT: &str = "glyph-dict";

/// BDF properties and charset.
pub const BDF: &str = "bdf";

/// X11 font driver name.
pub const XF86_NAME: &str = "xf86-driver-name";

/// SFNT table access.
pub const SFNT_TABLE: &str = "sfnt-table";

/// Every well-known id.
pub const ALL: [&str; 6] = [
    MULTI_MASTERS,
    POSTSCRIPT_FONT_NAME,
    GLYPH_DICT,
    BDF,
    XF86_NAME,
    SFNT_TABLE,
];

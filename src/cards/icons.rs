//! Default icon pool.

/// Sixteen glyphs; a standard game draws eight of them.
pub const DEFAULT_ICONS: [&str; 16] = [
    "🜁", "🜂", "🜃", "🜄", "🜏", "🜔", "🜍", "🝔", "🝗", "🝑", "☼", "☾", "☽", "♢", "♤", "♧",
];

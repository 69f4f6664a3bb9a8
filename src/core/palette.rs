//! core/palette.rs — Named link colors (`C0`..`C9`, tab10 cycle).

/// Palette used for threshold coloring.
pub struct LinkColors {
    pub above_threshold: &'static str,
    pub palette: [&'static str; 9],
}

pub const LINK_COLORS: LinkColors = LinkColors {
    above_threshold: "C0",
    palette: ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9"],
};

const TAB10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

/// Resolve `"C0".."C9"` or `"#rrggbb"` to RGB.
pub fn resolve(code: &str) -> Option<(u8, u8, u8)> {
    if let Some(idx) = code.strip_prefix('C') {
        let i: usize = idx.parse().ok()?;
        return TAB10.get(i).copied();
    }
    let hex = code.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

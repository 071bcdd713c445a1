use crate::vendor::FontEntry;
use anyhow::*;
use std::io::Write;

/// Start of the font data region in the FLASH memory map.
pub const FONT_BASE: usize = 0x2053_0000;

/// Writes the module index: one `pub mod` line per vendored font, in entry
/// order.
pub fn write_module_index(fonts: &[FontEntry], mut output: impl Write) -> Result<()> {
    writeln!(output, "{}", crate::GENERATED_HEADER)?;
    writeln!(
        output,
        "// The order of these modules impacts the link order, which changes the position in the binary image."
    )?;
    for font in fonts {
        writeln!(output, "pub mod {};", font.module)?;
    }
    Ok(())
}

/// Writes the offset map consumed by the graphics server.
///
/// Offsets are running byte sums in entry order, starting at zero relative to
/// [`FONT_BASE`]. They are only correct if the linker places the modules in
/// the same order the module index lists them; nothing verifies that the
/// image actually fits the physical region.
pub fn write_font_map(fonts: &[FontEntry], mut output: impl Write) -> Result<()> {
    writeln!(output, "{}", crate::GENERATED_HEADER)?;
    writeln!(
        output,
        "// This makes probably bad assumptions about how link order is computed. Be suspicious of these offsets."
    )?;
    writeln!(output, "#![allow(dead_code)]")?;
    writeln!(output, "pub const FONT_BASE: usize = 0x{FONT_BASE:08x};")?;

    let mut offset = 0;
    for font in fonts {
        let symbol = font.module.to_uppercase();
        writeln!(output, "pub const {symbol}_OFFSET: usize = 0x{offset:08x};")?;
        writeln!(output, "pub const {symbol}_LEN: usize = 0x{:08x};", font.byte_len())?;
        offset += font.byte_len();
    }
    writeln!(output, "pub const FONT_TOTAL_LEN: usize = 0x{offset:08x};")?;
    Ok(())
}

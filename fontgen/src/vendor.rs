use crate::{fontmap, scan};
use anyhow::*;
use derive_setters::Setters;
use log::warn;
use regex_lite::Regex;
use std::{
    fs,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

/// Line that opens the copy window in a blitstr font source.
pub const GLYPH_DATA_MARKER: &str = "/// Packed glyph pattern data.";
/// Line that closes the copy window.
pub const ARRAY_END_MARKER: &str = "];";

/// One vendored font: its module name and the declared length of its packed
/// glyph array.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FontEntry {
    pub module: String,
    pub glyph_words: usize,
}
impl FontEntry {
    /// The number of bytes the glyph array occupies in the packed image.
    pub fn byte_len(&self) -> usize {
        self.glyph_words * 4
    }
}

#[derive(Setters)]
#[setters(into)]
pub struct VendorConfig {
    #[setters(skip)]
    font_dir: PathBuf,
    out_dir: PathBuf,
    index_path: PathBuf,
    map_path: PathBuf,
}
impl VendorConfig {
    pub fn new(font_dir: PathBuf) -> Self {
        VendorConfig {
            font_dir,
            out_dir: PathBuf::from("fonts"),
            index_path: PathBuf::from("fonts.rs"),
            map_path: PathBuf::from("../../services/graphics-server/src/fontmap.rs"),
        }
    }
}

/// Copies the packed glyph declaration out of one font source.
///
/// Emits the generated-file header, then copies the window running from the
/// glyph marker through the closing `];` line, rewriting `pub const` to
/// `pub static` and suffixing the `DATA` symbol with the module name so the
/// generated modules do not collide. Returns the declared element count, or
/// `None` if no recognizable declaration line was seen; the caller omits such
/// fonts from the offset map.
///
/// If the closing `];` never appears, the window stays open through end of
/// file. The script this tool replaces behaved the same way; review before
/// changing it, downstream consumers may rely on whole-tail copies.
pub fn vendor_font(
    module: &str,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<Option<usize>> {
    writeln!(output, "{}", crate::GENERATED_HEADER)?;
    writeln!(output, "#[allow(dead_code)]")?;
    writeln!(output, "#[link_section=\".fontdata\"]")?;
    writeln!(output, "#[no_mangle]")?;
    writeln!(output, "#[used]")?;

    let data_decl = Regex::new(r"DATA\w*:\s*\[u32;\s*(\d+)\]")?;
    let data_symbol = format!("DATA_{}", module.to_uppercase());

    let mut copying = false;
    let mut glyph_words = None;
    for line in input.lines() {
        let line = line?;
        if line.trim() == GLYPH_DATA_MARKER {
            copying = true;
        }
        if copying {
            let fixup = line
                .replace("pub const", "pub static")
                .replace("DATA", &data_symbol);
            if let Some(captures) = data_decl.captures(&fixup) {
                glyph_words = Some(captures[1].parse()?);
            }
            writeln!(output, "{fixup}")?;
        }
        if line.trim() == ARRAY_END_MARKER {
            copying = false;
        }
    }
    Ok(glyph_words)
}

/// Vendors every font source in the configured directory, then writes the
/// module index and the offset map in the same order.
pub fn vendor_fonts(config: &VendorConfig) -> Result<Vec<FontEntry>> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("cannot create output directory '{}'", config.out_dir.display()))?;

    let mut fonts = Vec::new();
    for path in scan::scan_font_dir(&config.font_dir)? {
        let file_name = match path.file_name().and_then(|x| x.to_str()) {
            Some(x) => x.to_string(),
            None => bail!("font source has a non-UTF-8 file name: '{}'", path.display()),
        };
        let module = match file_name.split('.').next() {
            Some(x) if !x.is_empty() => x.to_lowercase(),
            _ => bail!("cannot derive a module name from '{file_name}'"),
        };
        println!("Processing {file_name}");

        let input = BufReader::new(
            File::open(&path).with_context(|| format!("cannot read '{}'", path.display()))?,
        );
        let out_path = config.out_dir.join(&file_name);
        let output = File::create(&out_path)
            .with_context(|| format!("cannot write '{}'", out_path.display()))?;
        match vendor_font(&module, input, output)? {
            Some(glyph_words) => fonts.push(FontEntry { module, glyph_words }),
            None => warn!(
                "no glyph data declaration found in '{}'; font omitted from the offset map",
                path.display()
            ),
        }
    }

    let index = File::create(&config.index_path)
        .with_context(|| format!("cannot write '{}'", config.index_path.display()))?;
    fontmap::write_module_index(&fonts, index)?;

    let map = File::create(&config.map_path)
        .with_context(|| format!("cannot write '{}'", config.map_path.display()))?;
    fontmap::write_font_map(&fonts, map)?;

    Ok(fonts)
}

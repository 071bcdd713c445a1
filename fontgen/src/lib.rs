//! A build-time tool that vendors the packed glyph data out of blitstr font
//! sources. Each font becomes a linker-section-annotated module placing its
//! glyph array in the FLASH font region, and a companion offset map records
//! where each array lands in the packed image.
//!
//! This is run manually on the rare occasions the upstream fonts change.
//! Keeping the glyph data out of the kernel image keeps it a large ball of
//! static data away from the update path.

pub mod fontmap;
pub mod scan;
pub mod vendor;

/// Header line stamped on every generated file.
pub const GENERATED_HEADER: &str = "// This file is autogenerated by fontgen. Do not edit.";

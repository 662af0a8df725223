//! Base color palette and per-cube color fragments

use crate::layout::CUBE_VERTEX_COUNT;
use std::sync::OnceLock;

/// Number of colors in the standard palette
pub const PALETTE_SIZE: usize = 8;

/// Black, red, green, blue, cyan, magenta, yellow, gray
pub const STANDARD_COLORS: [[u8; 3]; PALETTE_SIZE] = [
    [0x00, 0x00, 0x00],
    [0xFF, 0x00, 0x00],
    [0x00, 0xFF, 0x00],
    [0x00, 0x00, 0xFF],
    [0x00, 0xFF, 0xFF],
    [0xFF, 0x00, 0xFF],
    [0xFF, 0xFF, 0x00],
    [0x88, 0x88, 0x88],
];

/// An ordered set of base colors.
///
/// Each base color expands into a fragment of RGBA values, one per cube
/// vertex. Fragments are built on first use and cached for the lifetime of
/// the palette.
#[derive(Debug)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
    fragments: OnceLock<Vec<Vec<[f32; 4]>>>,
}

impl Palette {
    /// The eight-color palette
    pub fn standard() -> Self {
        Self {
            colors: STANDARD_COLORS.to_vec(),
            fragments: OnceLock::new(),
        }
    }

    /// Number of base colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Base color at `index` after wrapping
    pub fn color(&self, index: usize) -> [u8; 3] {
        self.colors[self.wrap_index(index)]
    }

    /// Map any color index into the palette.
    ///
    /// Every index at or past the palette size wraps, including the size
    /// itself.
    pub fn wrap_index(&self, index: usize) -> usize {
        index % self.colors.len()
    }

    /// RGBA values for one cube instance of the given color
    pub fn fragment(&self, index: usize) -> &[[f32; 4]] {
        let fragments = self.fragments.get_or_init(|| {
            self.colors
                .iter()
                .map(|&[r, g, b]| {
                    let rgba = [
                        r as f32 / 255.0,
                        g as f32 / 255.0,
                        b as f32 / 255.0,
                        1.0,
                    ];
                    vec![rgba; CUBE_VERTEX_COUNT]
                })
                .collect()
        });
        &fragments[self.wrap_index(index)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Clone for Palette {
    fn clone(&self) -> Self {
        Self {
            colors: self.colors.clone(),
            fragments: OnceLock::new(),
        }
    }
}

use image::RgbaImage;
use std::collections::HashMap;

pub const TILE_LETTERS: std::ops::RangeInclusive<char> = 'A'..='Z';

pub type PngBytes = Vec<u8>;

#[derive(Clone, Debug, Default)]
pub struct BoardRequest {
    pub words: Vec<String>,
    pub board_size: Option<usize>,
    pub validate: bool,
}

impl BoardRequest {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            ..Default::default()
        }
    }
}

// One image per letter. Tiles are assumed to share the dimensions of the `A` tile.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: HashMap<char, RgbaImage>,
    tile_width: u32,
    tile_height: u32,
}

impl TileSet {
    pub fn new(tiles: HashMap<char, RgbaImage>) -> anyhow::Result<Self> {
        let reference = tiles
            .get(&'A')
            .ok_or_else(|| anyhow::anyhow!("tile set is missing the 'A' tile"))?;
        let (tile_width, tile_height) = reference.dimensions();

        Ok(Self {
            tiles,
            tile_width,
            tile_height,
        })
    }

    pub fn get(&self, letter: char) -> Option<&RgbaImage> {
        self.tiles.get(&letter.to_ascii_uppercase())
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

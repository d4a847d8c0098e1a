use crate::models::{PngBytes, TileSet};
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};
use rand::Rng;
use scrabble_board_library::models::Board;
use std::{io::Cursor, sync::Arc};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 0]);
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Draws a [`Board`] as a grid of letter tiles on a transparent background.
///
/// Each tile sits in its own cell surrounded by `padding` pixels and is tilted
/// by a small random angle so the result looks hand placed.
#[derive(Clone)]
pub struct BoardRenderer {
    tiles: Arc<TileSet>,
    padding: u32,
    max_rotation_degrees: f32,
}

impl BoardRenderer {
    pub fn new(tiles: TileSet, padding: u32, max_rotation_degrees: f32) -> Self {
        Self {
            tiles: Arc::new(tiles),
            padding,
            max_rotation_degrees,
        }
    }

    pub fn render(&self, board: &Board) -> RgbaImage {
        self.render_with_rng(board, &mut rand::thread_rng())
    }

    pub fn render_with_rng<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> RgbaImage {
        let (tile_width, tile_height) = (self.tiles.tile_width(), self.tiles.tile_height());
        let padded_width = tile_width + 2 * self.padding;
        let padded_height = tile_height + 2 * self.padding;
        let size = board.size() as u32;

        let mut image = RgbaImage::from_pixel(size * padded_width, size * padded_height, BACKGROUND);

        for (row, cells) in board.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(tile) = cell.and_then(|letter| self.tiles.get(letter)) else {
                    continue;
                };

                let angle = self.random_angle(rng);
                let rotated = rotate_expanded(tile, angle);

                let x = col as i64 * padded_width as i64 + self.padding as i64;
                let y = row as i64 * padded_height as i64 + self.padding as i64;
                let tile_x = x + (tile_width as i64 - rotated.width() as i64).div_euclid(2);
                let tile_y = y + (tile_height as i64 - rotated.height() as i64).div_euclid(2);

                imageops::overlay(&mut image, &rotated, tile_x, tile_y);
            }
        }

        image
    }

    pub fn render_png(&self, board: &Board) -> Result<PngBytes, image::ImageError> {
        encode_png(&self.render(board))
    }

    fn random_angle<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if !self.max_rotation_degrees.is_finite() || self.max_rotation_degrees <= 0.0 {
            return 0.0;
        }

        rng.gen_range(-self.max_rotation_degrees..=self.max_rotation_degrees)
    }
}

pub fn encode_png(image: &RgbaImage) -> Result<PngBytes, image::ImageError> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(buffer.into_inner())
}

// Rotates counter-clockwise by `degrees`, growing the canvas so the corners
// of the tile are not cut off.
fn rotate_expanded(tile: &RgbaImage, degrees: f32) -> RgbaImage {
    if degrees == 0.0 {
        return tile.clone();
    }

    let theta = degrees.to_radians();
    let (width, height) = (tile.width() as f32, tile.height() as f32);
    let (sin, cos) = (theta.sin().abs(), theta.cos().abs());
    let expanded_width = (width * cos + height * sin).ceil() as u32;
    let expanded_height = (width * sin + height * cos).ceil() as u32;

    let mut canvas = RgbaImage::from_pixel(
        expanded_width.max(tile.width()),
        expanded_height.max(tile.height()),
        TRANSPARENT,
    );
    let offset_x = (canvas.width() - tile.width()) / 2;
    let offset_y = (canvas.height() - tile.height()) / 2;
    imageops::replace(&mut canvas, tile, offset_x as i64, offset_y as i64);

    // imageproc rotates clockwise for positive angles.
    rotate_about_center(&canvas, -theta, Interpolation::Bicubic, TRANSPARENT)
}

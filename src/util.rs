use image::DynamicImage;

use crate::error::Error;
use crate::grid::ColorSample;

/// Sample an image into per-cell representative colors.
///
/// The grid side length is the image width floor-divided by `cell_px`.
/// Each cell's representative color is the per-channel median of its
/// pixel block, returned indexed `samples[row][col]`.
pub fn sample_cells(img: &DynamicImage, cell_px: u32) -> Result<Vec<Vec<ColorSample>>, Error> {
    if cell_px == 0 {
        return Err(Error::DegenerateGrid);
    }

    let count = (img.width() / cell_px) as usize;
    if count == 0 {
        return Err(Error::DegenerateGrid);
    }

    // the grid is square, so the image must hold `count` full rows of
    // blocks as well; cropping past the bottom would yield empty blocks
    if ((img.height() / cell_px) as usize) < count {
        return Err(Error::DegenerateGrid);
    }

    let mut samples = vec![vec![[0u8; 3]; count]; count];

    for row in 0..count {
        for col in 0..count {
            let block = img
                .crop_imm(col as u32 * cell_px, row as u32 * cell_px, cell_px, cell_px)
                .to_rgb8();
            samples[row][col] = median_color(&block);
        }
    }

    Ok(samples)
}

/// Per-channel median over a pixel block.
fn median_color(block: &image::RgbImage) -> ColorSample {
    let mut channels: [Vec<u8>; 3] = Default::default();

    for pixel in block.pixels() {
        for (channel, values) in channels.iter_mut().enumerate() {
            values.push(pixel.0[channel]);
        }
    }

    let mut sample = [0u8; 3];
    for (channel, values) in channels.iter_mut().enumerate() {
        values.sort_unstable();
        sample[channel] = values[values.len() / 2];
    }

    sample
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::find::find_path;
    use crate::grid::{Cell, Maze, Point};
    use crate::instruct::{compress, encode_path, Instruction};
    use image::{Rgb, RgbImage};

    /// Paint a test image where every 10x10 cell is a solid color.
    fn paint_cells(colors: &[Vec<[u8; 3]>]) -> DynamicImage {
        let size = colors.len() as u32 * 10;
        let mut img = RgbImage::new(size, size);

        for (row, row_colors) in colors.iter().enumerate() {
            for (col, color) in row_colors.iter().enumerate() {
                for dy in 0..10 {
                    for dx in 0..10 {
                        img.put_pixel(
                            col as u32 * 10 + dx,
                            row as u32 * 10 + dy,
                            Rgb(*color),
                        );
                    }
                }
            }
        }

        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_sample_solid_cells() {
        let img = paint_cells(&[
            vec![[0, 255, 0], [255, 255, 255]],
            vec![[0, 0, 0], [255, 0, 0]],
        ]);

        let samples = sample_cells(&img, 10).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0][0], [0, 255, 0]);
        assert_eq!(samples[0][1], [255, 255, 255]);
        assert_eq!(samples[1][0], [0, 0, 0]);
        assert_eq!(samples[1][1], [255, 0, 0]);
    }

    #[test]
    fn test_median_ignores_speckle() {
        let mut img = paint_cells(&[vec![[255, 255, 255]]]);

        // a few dark pixels must not flip the cell's median
        if let DynamicImage::ImageRgb8(buf) = &mut img {
            buf.put_pixel(0, 0, Rgb([0, 0, 0]));
            buf.put_pixel(5, 5, Rgb([0, 0, 0]));
            buf.put_pixel(9, 9, Rgb([0, 0, 0]));
        }

        let samples = sample_cells(&img, 10).unwrap();
        assert_eq!(samples[0][0], [255, 255, 255]);
    }

    #[test]
    fn test_degenerate_sizes() {
        let img = paint_cells(&[vec![[255, 255, 255]]]);
        assert_eq!(sample_cells(&img, 0), Err(Error::DegenerateGrid));
        assert_eq!(sample_cells(&img, 100), Err(Error::DegenerateGrid));
    }

    #[test]
    fn test_short_image_rejected() {
        // 30 wide but only 10 tall: a 3x3 grid cannot be filled
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(30, 10, Rgb([255, 255, 255])));
        assert_eq!(sample_cells(&img, 10), Err(Error::DegenerateGrid));

        // taller than wide is fine, the extra rows are ignored
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 35, Rgb([255, 255, 255])));
        let samples = sample_cells(&img, 10).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0][0], [255, 255, 255]);
    }

    #[test]
    fn test_image_to_instructions() {
        const W: [u8; 3] = [255, 255, 255];
        const B: [u8; 3] = [0, 0, 0];
        const G: [u8; 3] = [0, 255, 0];
        const R: [u8; 3] = [255, 0, 0];

        let img = paint_cells(&[
            vec![G, W, W], //
            vec![B, B, W], //
            vec![R, W, W],
        ]);

        let samples = sample_cells(&img, 10).unwrap();
        let maze = Maze::classify(&samples).unwrap();
        assert_eq!(maze.start, Point { col: 0, row: 0 });
        assert_eq!(maze.goal, Point { col: 0, row: 2 });
        assert_eq!(maze.get(Point { col: 1, row: 1 }), Cell::Obstacle);

        let path = find_path(&maze).unwrap();
        let instructions = compress(&encode_path(&path).unwrap());
        assert_eq!(
            instructions,
            vec![
                Instruction::Forward(2),
                Instruction::TurnRight,
                Instruction::Forward(2),
                Instruction::TurnRight,
                Instruction::Forward(2),
            ]
        );
    }
}

use crate::Color;

/// Rows are stored top to bottom, pixels within a row left to right.
pub struct Image {
    width: u32,
    height: u32,
    pub pixels: Box<[Color]>,
}

impl Image {
    pub fn new(width: u32, height: u32) -> Self {
        let num_pixels = width as usize * height as usize;

        Self {
            width,
            height,
            pixels: vec![Color::BLACK; num_pixels].into_boxed_slice(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied()
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Color]> + '_ {
        // chunks_mut panics on a chunk size of zero
        self.pixels.chunks_mut((self.width as usize).max(1))
    }

    /// Quantized RGB triplets in scan order.
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels.iter().map(|color| color.to_rgb_bytes()).collect()
    }

    /// The same as [`Image::to_rgb8`], flattened into one byte buffer.
    pub fn to_rgb8_bytes(&self) -> Vec<u8> {
        let triplets = self.to_rgb8();
        bytemuck::cast_slice::<[u8; 3], u8>(&triplets).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::Image;
    use crate::Color;

    #[test]
    fn pixel_lookup() {
        let mut image = Image::new(3, 2);
        image.pixels[4] = Color::WHITE;

        assert_eq!(image.pixel(1, 1), Some(Color::WHITE));
        assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(image.pixel(0, 2), None);
    }

    #[test]
    fn rows_follow_scan_order() {
        let mut image = Image::new(2, 3);
        for (y, row) in image.rows_mut().enumerate() {
            row.fill(Color::from_rgb(y as f32 / 2.0, 0.0, 0.0));
        }

        assert_eq!(image.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(image.pixel(0, 2), Some(Color::from_rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn flattened_bytes() {
        let mut image = Image::new(2, 1);
        image.pixels[0] = Color::WHITE;
        image.pixels[1] = Color::from_rgb(0.0, 0.5, 1.0);

        assert_eq!(image.to_rgb8(), vec![[255, 255, 255], [0, 127, 255]]);
        assert_eq!(image.to_rgb8_bytes(), vec![255, 255, 255, 0, 127, 255]);
    }

    #[test]
    fn empty_image() {
        let mut image = Image::new(0, 4);
        assert_eq!(image.rows_mut().count(), 0);
        assert!(image.to_rgb8_bytes().is_empty());
    }
}

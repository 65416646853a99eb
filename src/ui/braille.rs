// Braille canvas for high-resolution terminal rendering
// Each terminal cell contains a 2×4 grid of Braille dots
// This gives us 2× horizontal and 4× vertical resolution

/// What was last drawn into a cell, so the renderer can color it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ink {
    #[default]
    Blank,
    Divider,
    Paddle,
    Ball,
}

pub struct BrailleCanvas {
    width: usize,        // Width in terminal cells
    height: usize,       // Height in terminal cells
    dots: Vec<Vec<u8>>,  // 2D array of dot patterns (0-255)
    inks: Vec<Vec<Ink>>, // Color class per cell
    ink: Ink,            // Ink used by subsequent draws
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            inks: vec![vec![Ink::Blank; width]; height],
            ink: Ink::Blank,
        }
    }

    /// Select the ink for following draw calls
    pub fn set_ink(&mut self, ink: Ink) {
        self.ink = ink;
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.inks[cell_y][cell_x] = self.ink;
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Fill an axis-aligned ellipse centered on (cx, cy)
    /// Pixels are not square, so a round ball needs separate radii
    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        let rx = rx.max(0.5);
        let ry = ry.max(0.5);
        let x0 = (cx - rx).floor().max(0.0) as usize;
        let y0 = (cy - ry).floor().max(0.0) as usize;
        let x1 = (cx + rx).ceil().max(0.0) as usize;
        let y1 = (cy + ry).ceil().max(0.0) as usize;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let nx = (px as f64 + 0.5 - cx) / rx;
                let ny = (py as f64 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_pixel(px, py);
                }
            }
        }
    }

    /// Dashed horizontal line: `dash` pixels on, `gap` pixels off
    pub fn dashed_horizontal_line(&mut self, y: usize, dash: usize, gap: usize) {
        let period = (dash + gap).max(1);
        for x in 0..self.pixel_width() {
            if x % period < dash {
                self.set_pixel(x, y);
            }
        }
    }

    /// Dashed vertical line: `dash` pixels on, `gap` pixels off
    pub fn dashed_vertical_line(&mut self, x: usize, dash: usize, gap: usize) {
        let period = (dash + gap).max(1);
        for y in 0..self.pixel_height() {
            if y % period < dash {
                self.set_pixel(x, y);
            }
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn ink_at(&self, cell_x: usize, cell_y: usize) -> Ink {
        if cell_x >= self.width || cell_y >= self.height {
            return Ink::Blank;
        }
        self.inks[cell_y][cell_x]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_canvas() {
        let mut canvas = BrailleCanvas::new(2, 2);

        // Set a single pixel
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1

        // Bottom-right dot of a cell is dot 8
        canvas.set_pixel(3, 3);
        assert_eq!(canvas.to_char(1, 0), '⢀');

        // Out of range is ignored
        canvas.set_pixel(100, 100);
        assert_eq!(canvas.to_char(5, 5), ' ');
    }

    #[test]
    fn test_fill_rect_fills_whole_cell() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_ink(Ink::Paddle);
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.ink_at(0, 0), Ink::Paddle);
        assert_eq!(canvas.to_char(1, 0), '⠀');
        assert_eq!(canvas.ink_at(1, 0), Ink::Blank);
    }

    #[test]
    fn test_dashed_line_pattern() {
        let mut canvas = BrailleCanvas::new(4, 1);
        canvas.dashed_horizontal_line(0, 2, 2);
        // Pixels 0,1 on, 2,3 off, 4,5 on, 6,7 off
        assert_eq!(canvas.to_char(0, 0), '⠉');
        assert_eq!(canvas.to_char(1, 0), '⠀');
        assert_eq!(canvas.to_char(2, 0), '⠉');
    }

    #[test]
    fn test_ellipse_is_centered() {
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.set_ink(Ink::Ball);
        canvas.fill_ellipse(4.0, 4.0, 2.0, 2.0);
        assert_eq!(canvas.ink_at(1, 0), Ink::Ball);
        assert_eq!(canvas.ink_at(2, 1), Ink::Ball);
        assert_eq!(canvas.ink_at(0, 0), Ink::Blank);
    }
}

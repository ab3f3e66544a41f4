//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite `over` on top of this color with `alpha` in 0..=255.
    pub fn blend(self, over: Rgb, alpha: u8) -> Rgb {
        let a = alpha as u16;
        let mix = |base: u8, top: u8| -> u8 {
            ((base as u16 * (255 - a) + top as u16 * a + 127) / 255) as u8
        };
        Rgb {
            r: mix(self.r, over.r),
            g: mix(self.g, over.g),
            b: mix(self.b, over.b),
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(240, 240, 240),
            bg: Rgb::new(18, 18, 18),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    /// Write a decimal number without allocating. Returns the digit count.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0usize;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for i in 0..len {
            let ch = digits[len - 1 - i] as char;
            self.put_char(x.saturating_add(i as u16), y, ch, style);
        }
        len as u16
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Darken a region as if a translucent `color` layer were drawn over it.
    pub fn tint_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb, alpha: u8) {
        for dy in 0..h {
            for dx in 0..w {
                if let Some(i) = self.idx(x.saturating_add(dx), y.saturating_add(dy)) {
                    let style = &mut self.cells[i].style;
                    style.fg = style.fg.blend(color, alpha);
                    style.bg = style.bg.blend(color, alpha);
                }
            }
        }
    }
}

/// Number of decimal digits in `value`
pub fn digit_count(value: u32) -> u16 {
    let mut n = value / 10;
    let mut len = 1;
    while n > 0 {
        len += 1;
        n /= 10;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
    }

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        assert_eq!(fb.put_u32(1, 0, 4096, CellStyle::default()), 4);
        assert_eq!(row_text(&fb, 0), " 4096       ");
        assert_eq!(fb.put_u32(8, 0, 0, CellStyle::default()), 1);
        assert_eq!(fb.get(8, 0).unwrap().ch, '0');
    }

    #[test]
    fn digit_count_matches_put_u32() {
        for v in [0, 9, 10, 99, 100, 12345, u32::MAX] {
            let mut fb = FrameBuffer::new(12, 1);
            assert_eq!(fb.put_u32(0, 0, v, CellStyle::default()), digit_count(v));
        }
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(1, 1, "abc", CellStyle::default());
        fb.fill_rect(5, 5, 3, 3, '#', CellStyle::default());
        assert_eq!(fb.get(1, 1).unwrap().ch, 'a');
        assert!(fb.get(2, 1).is_none());
    }

    #[test]
    fn blend_extremes() {
        let white = Rgb::new(255, 255, 255);
        let black = Rgb::new(0, 0, 0);
        assert_eq!(white.blend(black, 0), white);
        assert_eq!(white.blend(black, 255), black);
        assert_eq!(white.blend(black, 140), Rgb::new(115, 115, 115));
    }

    #[test]
    fn tint_darkens_region_only() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.tint_rect(0, 0, 2, 1, Rgb::new(0, 0, 0), 128);
        let base = CellStyle::default();
        assert!(fb.get(0, 0).unwrap().style.bg.r < base.bg.r);
        assert!(fb.get(1, 0).unwrap().style.fg.r < base.fg.r);
        assert_eq!(fb.get(2, 0).unwrap().style, base);
    }
}

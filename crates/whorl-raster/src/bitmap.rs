/// Square straight-alpha RGBA8 texture.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    size: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    /// Creates a fully transparent bitmap of `size`×`size` pixels.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            rgba: vec![0; (size * size * 4) as usize],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.size + x) * 4) as usize;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }

    #[inline]
    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = ((y * self.size + x) * 4) as usize;
        self.rgba[i..i + 4].copy_from_slice(&px);
    }
}

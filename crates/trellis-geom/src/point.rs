/// A location in cell co-ordinates, with the origin at the top left of the
/// screen.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column offset.
    pub x: u32,
    /// Row offset.
    pub y: u32,
}

impl Point {
    /// The origin point.
    pub fn zero() -> Self {
        (0, 0).into()
    }
}

impl From<(u32, u32)> for Point {
    #[inline]
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

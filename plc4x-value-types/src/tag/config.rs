/// Width of a value type tag on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagWidth {
    /// Single octet
    U8,
    /// Two octets, big-endian
    U16,
}

impl TagWidth {
    /// Bytes the tag occupies
    pub const fn size(self) -> usize {
        match self {
            TagWidth::U8 => 1,
            TagWidth::U16 => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagConfig {
    pub width: TagWidth,
}

impl Default for TagConfig {
    fn default() -> Self {
        TagConfig {
            width: TagWidth::U8,
        }
    }
}

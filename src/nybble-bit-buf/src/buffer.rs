/// An immutable view over a caller-owned byte buffer.
///
/// The view is cheap to copy, so any number of readers may
/// share the same underlying bytes. The borrow guarantees the
/// bytes outlive every reader built on top of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitBuffer<'a> {
    data: &'a [u8],
}

impl<'a> BitBuffer<'a> {
    /// Creates a new [`BitBuffer`] over a given byte slice.
    #[inline]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Creates an empty [`BitBuffer`].
    ///
    /// Every extraction from it will fail.
    #[inline]
    pub const fn empty() -> Self {
        Self { data: &[] }
    }

    /// Gets the number of bytes in the buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Indicates whether the buffer holds no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the total number of addressable bits.
    #[inline]
    pub const fn bit_len(&self) -> usize {
        self.data.len() << 3
    }

    /// Gets a view of the underlying bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    #[inline]
    pub(crate) fn byte(&self, idx: usize) -> u8 {
        self.data[idx]
    }
}

impl<'a> From<&'a [u8]> for BitBuffer<'a> {
    #[inline]
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for BitBuffer<'a> {
    #[inline]
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

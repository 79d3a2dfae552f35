//! Growable scratch buffer with auto-growing capacity and stack discipline.

/// A growable byte buffer that doubles as a LIFO scratch stack.
///
/// The buffer tracks a logical length (`top`) separate from the backing
/// allocation. Pushes append at `top` and grow the allocation geometrically
/// (x1.5) when needed; pops remove from the end. A caller that may fail
/// midway records a [`mark`](ScratchBuf::mark) on entry and restores it with
/// [`rollback_to`](ScratchBuf::rollback_to) on the error path, so a failed
/// composite operation leaves the buffer exactly as it found it.
///
/// # Example
///
/// ```
/// use json_strict_buffers::ScratchBuf;
///
/// let mut buf = ScratchBuf::new();
/// let mark = buf.mark();
/// buf.push_slice(b"abc");
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.take_from(mark), b"abc");
/// assert!(buf.is_empty());
/// ```
pub struct ScratchBuf {
    /// Backing allocation; only the first `top` bytes are live.
    bytes: Vec<u8>,
    /// Logical length. Never exceeds `bytes.len()`.
    top: usize,
}

/// Initial backing allocation in bytes.
const INIT_CAPACITY: usize = 256;

impl Default for ScratchBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchBuf {
    /// Creates an empty buffer with the default initial capacity (256 bytes).
    pub fn new() -> Self {
        Self::with_capacity(INIT_CAPACITY)
    }

    /// Creates an empty buffer with a custom initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity],
            top: 0,
        }
    }

    /// Logical length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.top
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Size of the backing allocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Ensures room for `extra` more bytes, growing the allocation x1.5
    /// until it fits. Growth preserves all live bytes.
    pub fn ensure_capacity(&mut self, extra: usize) {
        let required = self.top + extra;
        if required > self.bytes.len() {
            let mut size = self.bytes.len().max(INIT_CAPACITY);
            while required > size {
                size += size >> 1;
            }
            self.bytes.resize(size, 0);
        }
    }

    /// Reserves `n` freshly appended bytes and returns them for writing.
    ///
    /// The returned slice is only valid until the next push; callers must
    /// not hold on to it across further buffer operations.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        self.ensure_capacity(n);
        let start = self.top;
        self.top += n;
        &mut self.bytes[start..self.top]
    }

    /// Appends a single byte.
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.ensure_capacity(1);
        self.bytes[self.top] = byte;
        self.top += 1;
    }

    /// Appends a byte slice.
    pub fn push_slice(&mut self, slice: &[u8]) {
        self.push(slice.len()).copy_from_slice(slice);
    }

    /// Removes the last `n` bytes and returns them.
    ///
    /// Panics if fewer than `n` bytes are live; popping more than was pushed
    /// is a caller bug, not a recoverable condition.
    pub fn pop(&mut self, n: usize) -> &[u8] {
        assert!(n <= self.top, "pop past the bottom of the scratch buffer");
        self.top -= n;
        &self.bytes[self.top..self.top + n]
    }

    /// Records the current logical length for a later rollback or harvest.
    #[inline]
    pub fn mark(&self) -> usize {
        self.top
    }

    /// Discards everything pushed since `mark`.
    #[inline]
    pub fn rollback_to(&mut self, mark: usize) {
        debug_assert!(mark <= self.top);
        self.top = mark;
    }

    /// Removes everything pushed since `mark` and returns it as an owned
    /// vector.
    pub fn take_from(&mut self, mark: usize) -> Vec<u8> {
        debug_assert!(mark <= self.top);
        let harvested = self.bytes[mark..self.top].to_vec();
        self.top = mark;
        harvested
    }

    /// Discards all live bytes, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.top = 0;
    }

    /// View of the live bytes.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.top]
    }
}

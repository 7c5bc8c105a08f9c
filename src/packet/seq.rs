//! 16位回绕序列号的比较与分配。
//! Comparison and allocation of wrapping 16-bit sequence numbers.

/// Half of the 16-bit sequence number space.
/// 16位序列号空间的一半。
pub const HALF_SEQUENCE_SPACE: u16 = 0x8000;

/// Returns `true` if `a` was sent after `b`, treating both as wrapping
/// 16-bit values. At exactly half the space apart the larger raw value wins,
/// so that exactly one of `is_newer(a, b)` and `is_newer(b, a)` holds for
/// every `a != b`.
///
/// 将两者视为16位回绕值，判断 `a` 是否在 `b` 之后发送。
#[inline]
pub fn is_newer(a: u16, b: u16) -> bool {
    let diff = a.wrapping_sub(b);
    if diff == HALF_SEQUENCE_SPACE {
        return a > b;
    }
    diff != 0 && diff < HALF_SEQUENCE_SPACE
}

/// Hands out consecutive sequence numbers for an outgoing stream.
///
/// 为发送流分配连续的序列号。
#[derive(Debug, Clone)]
pub struct SequenceNumberAllocator {
    next: u16,
}

impl SequenceNumberAllocator {
    /// Starts at the given sequence number.
    /// 从给定序列号开始。
    pub fn new(initial: u16) -> Self {
        Self { next: initial }
    }

    /// Starts at a random sequence number.
    /// 从随机序列号开始。
    pub fn random() -> Self {
        Self::new(rand::random())
    }

    /// The sequence number the next call to [`allocate`](Self::allocate) returns.
    pub fn peek(&self) -> u16 {
        self.next
    }

    /// Returns the next sequence number and advances, wrapping after 65535.
    /// 返回下一个序列号并前进，65535 之后回绕。
    pub fn allocate(&mut self) -> u16 {
        let seq = self.next;
        self.next = self.next.wrapping_add(1);
        seq
    }
}

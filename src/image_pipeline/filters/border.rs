/// Clamps a possibly out-of-range coordinate onto `[0, len)`.
#[inline]
pub(crate) fn clamp_index(pos: isize, len: usize) -> usize {
    pos.clamp(0, len as isize - 1) as usize
}

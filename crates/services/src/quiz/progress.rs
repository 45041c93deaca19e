/// Integer percentage of `done` out of `total`, clamped to `0..=100`.
///
/// An empty total counts as finished.
pub(crate) fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = done.saturating_mul(100) / total;
    u8::try_from(pct.min(100)).unwrap_or(100)
}

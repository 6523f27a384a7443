//! Range partitioner for chunked sum jobs.
//!
//! Splits the interval `[1, n]` into fixed-size contiguous sub-ranges, one
//! per dispatched chunk task. Pure and deterministic: the dispatcher relies
//! on the emitted chunk count matching what the aggregator later expects.

/// Number of integers per chunk when splitting a sum job.
pub const DEFAULT_CHUNK_SIZE: i64 = 100_000_000;

/// A contiguous inclusive sub-range `[start, end]` of a sum job.
///
/// Transient: produced by [`partition`], consumed by exactly one chunk
/// worker, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    pub start: i64,
    pub end: i64,
}

/// Split `[1, n]` into consecutive chunks of at most `chunk_size` integers.
///
/// Chunks are emitted in ascending order and cover `[1, n]` exactly — no
/// gaps, no overlaps — with only the last chunk possibly shorter than
/// `chunk_size`. `n < 1` yields an empty vector: there is nothing to sum.
///
/// # Panics
///
/// Panics if `chunk_size < 1`.
pub fn partition(n: i64, chunk_size: i64) -> Vec<ChunkRange> {
    assert!(chunk_size >= 1, "chunk_size must be >= 1, got {chunk_size}");

    let mut chunks = Vec::new();
    let mut start: i64 = 1;
    while start <= n {
        let end = start.saturating_add(chunk_size - 1).min(n);
        chunks.push(ChunkRange { start, end });
        match start.checked_add(chunk_size) {
            Some(next) => start = next,
            // The next start would exceed i64::MAX, so it exceeds n too.
            None => break,
        }
    }
    chunks
}

//! Row-aligned parallel chunking over flat 2-D buffers.

use rayon::prelude::*;


/// Multiplier for number of chunks relative to CPU threads.
/// Using 3x threads provides good load balancing when some chunks finish faster.
const CHUNKS_PER_THREAD: usize = 3;

/// Rows per chunk so that `height` rows split into roughly
/// `CHUNKS_PER_THREAD * threads` chunks.
#[inline]
pub fn auto_chunk_rows(height: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (height / num_chunks).max(1)
}

/// Split a row-major buffer into mutable parallel chunks of whole rows.
///
/// Yields `(chunk_start_row, chunk)` pairs; every chunk length is a multiple
/// of `width`, and chunks never overlap.
///
/// # Panics
///
/// Panics if `width` is 0 or `data.len()` is not a multiple of `width`.
pub fn par_rows_mut<'a, T: Send + 'a>(
    data: &'a mut [T],
    width: usize,
) -> impl IndexedParallelIterator<Item = (usize, &'a mut [T])> + 'a {
    assert!(width > 0, "width must be > 0");
    assert_eq!(
        data.len() % width,
        0,
        "buffer length must be a multiple of width"
    );

    let height = data.len() / width;
    let chunk_rows = auto_chunk_rows(height);
    data.par_chunks_mut(width * chunk_rows)
        .enumerate()
        .map(move |(idx, chunk)| (idx * chunk_rows, chunk))
}

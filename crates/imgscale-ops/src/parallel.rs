//! Fork-join row partitioning.
//!
//! Every parallel operation in this crate follows the same pattern: split the
//! destination into contiguous bands of whole rows, process each band on its
//! own worker, and return once all bands are done. Bands never overlap, so
//! workers need no synchronization beyond the final join.
//!
//! With the `parallel` feature disabled the same bands run one after another
//! on the calling thread.

use imgscale_core::{Pixel, PixelBuffer};

/// Bands handed out per worker thread, so uneven rows still balance.
const TASKS_PER_WORKER: usize = 4;

/// Number of available workers.
#[inline]
pub fn workers() -> usize {
    #[cfg(feature = "parallel")]
    {
        rayon::current_num_threads().max(1)
    }
    #[cfg(not(feature = "parallel"))]
    {
        1
    }
}

/// Number of rows per band when splitting `height` rows across the workers.
///
/// ```rust
/// use imgscale_ops::parallel::rows_per_task;
///
/// assert!(rows_per_task(0) >= 1);
/// assert!(rows_per_task(1080) >= 1);
/// ```
pub fn rows_per_task(height: u32) -> usize {
    let tasks = workers() * TASKS_PER_WORKER;
    (height as usize).div_ceil(tasks).max(1)
}

/// Runs `f` over disjoint bands of `rows` destination rows and joins.
///
/// `f` receives the index of the band's first row and the band's pixels.
pub fn for_each_band<F>(dest: &mut PixelBuffer, rows: usize, f: F)
where
    F: Fn(u32, &mut [Pixel]) + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        dest.par_row_chunks_mut(rows)
            .for_each(|(first_row, band)| f(first_row, band));
    }
    #[cfg(not(feature = "parallel"))]
    {
        dest.row_chunks_mut(rows)
            .for_each(|(first_row, band)| f(first_row, band));
    }
}

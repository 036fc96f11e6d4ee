/// Question counts offered by default when starting a quiz.
pub const STANDARD_COUNTS: [usize; 3] = [10, 20, 30];

/// Count choices to offer for a pool of `pool_len` questions.
///
/// Returns the standard counts that fit the pool, followed by the full pool
/// length (the "all questions" option), ascending and deduplicated. Empty
/// for an empty pool.
#[must_use]
pub fn count_options(pool_len: usize) -> Vec<usize> {
    let mut options: Vec<usize> = STANDARD_COUNTS
        .into_iter()
        .filter(|count| *count <= pool_len)
        .collect();

    if pool_len > 0 && options.last() != Some(&pool_len) {
        options.push(pool_len);
    }
    options
}

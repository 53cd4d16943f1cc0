//! Levenshtein edit distance.

/// Compute the minimum number of single-character insertions, deletions or
/// substitutions needed to turn `a` into `b`.
///
/// Characters are Unicode scalar values, not bytes. The distance is symmetric
/// and zero only for equal strings.
///
/// # Examples
///
/// ```
/// use bb_scoring::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rolling rows of the (|a|+1) x (|b|+1) table; `prev[j]` holds dp[i-1][j].
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

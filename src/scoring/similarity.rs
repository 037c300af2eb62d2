/// Dot product of two sparse vectors. Entries must be sorted by column.
pub fn sparse_dot(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let mut sum = 0.0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (col_a, w_a) = a[i];
        let (col_b, w_b) = b[j];
        if col_a == col_b {
            sum += w_a * w_b;
            i += 1;
            j += 1;
        } else if col_a < col_b {
            i += 1;
        } else {
            j += 1;
        }
    }
    sum
}

/// Cosine similarity of two unit-length sparse vectors.
///
/// Rows and projections are already L2-normalized, so the dot product is
/// the cosine; clamping absorbs float drift at the ends of the range.
pub fn cosine(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    sparse_dot(a, b).clamp(0.0, 1.0)
}

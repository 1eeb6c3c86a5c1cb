/// The 3x3 sharpening kernel, row-major.
///
/// The center is weighted by 5 and the four direct neighbors by -1, so the
/// weights add up to 1 and flat regions are left unchanged.
pub const SHARPEN_KERNEL_3X3: [[i32; 3]; 3] = [[0, -1, 0], [-1, 5, -1], [0, -1, 0]];

/// Apply a 3x3 kernel to a 3x3 neighborhood of samples.
///
/// # Arguments
///
/// * `kernel` - The kernel weights, row-major.
/// * `patch` - The samples around the target, row-major.
///
/// # Returns
///
/// The weighted sum, without any clamping.
pub fn apply_kernel_3x3(kernel: &[[i32; 3]; 3], patch: &[[u8; 3]; 3]) -> i32 {
    kernel
        .iter()
        .zip(patch.iter())
        .flat_map(|(k_row, p_row)| k_row.iter().zip(p_row.iter()))
        .map(|(&k, &p)| k * p as i32)
        .sum()
}

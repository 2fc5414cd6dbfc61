//! Bit-array helpers for the block and stream primitives.
//!
//! Bit arrays are `i64` slices whose elements are 0 or 1, matching the
//! message representation used by the [`Cipher`](crate::Cipher) trait.
//! Only Simplified DES and Blum Blum Shub consume this module.

/// Re-arranges `array` according to a fixed 1-indexed permutation table.
///
/// The output length equals the table length: `output[i] = array[table[i] - 1]`.
/// Expansion tables (entries repeated) and compression tables (entries
/// dropped) are both valid.
pub fn permute(array: &[i64], table: &[usize]) -> Vec<i64> {
    table.iter().map(|&position| array[position - 1]).collect()
}

/// Circularly rotates the elements of `array` left by `distance` positions.
pub fn left_rotate(array: &[i64], distance: usize) -> Vec<i64> {
    if array.is_empty() {
        return Vec::new();
    }
    let len = array.len();
    let split = distance % len;
    let mut rotated = Vec::with_capacity(len);
    rotated.extend_from_slice(&array[split..]);
    rotated.extend_from_slice(&array[..split]);
    rotated
}

/// Element-wise XOR of two equal-length arrays.
pub fn xor(first: &[i64], second: &[i64]) -> Vec<i64> {
    assert_eq!(first.len(), second.len(), "xor operands must be equal length");
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| a ^ b)
        .collect()
}

/// True iff every element is 0 or 1.
pub fn is_bit_array(array: &[i64]) -> bool {
    array.iter().all(|&element| element == 0 || element == 1)
}

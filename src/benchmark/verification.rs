use crate::error::VerificationError;

/// Check that `data` is in non-decreasing order.
pub fn verify_sorted(data: &[i32]) -> Result<(), VerificationError> {
    match data.windows(2).position(|w| w[0] > w[1]) {
        Some(i) => Err(VerificationError::OrderViolation {
            index: i + 1,
            previous: data[i],
            current: data[i + 1],
        }),
        None => Ok(()),
    }
}

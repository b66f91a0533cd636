use super::*;

/// `x * y / denominator` in u128, rounded down
pub fn mul_div(x: u128, y: u128, denominator: u128) -> Result<u128> {
    require!(denominator > 0, ReserveLedgerError::MathOverflow);
    x.safe_mul(y)?.safe_div(denominator)
}

/// `numerator / denominator` expressed in basis points, rounded down.
///
/// Saturates at `u64::MAX` instead of failing; the result is informational and
/// a reserve many orders of magnitude above issuance is not an error.
pub fn ratio_in_basis_points(numerator: u128, denominator: u128) -> u64 {
    if denominator == 0 {
        return BASIS_POINT_MAX;
    }

    let bps = match mul_div(numerator, BASIS_POINT_MAX as u128, denominator) {
        Ok(bps) => bps,
        // numerator * 10_000 overflowed, divide first and accept the precision loss
        Err(_) => (numerator / denominator).saturating_mul(BASIS_POINT_MAX as u128),
    };

    u64::try_from(bps).unwrap_or(u64::MAX)
}

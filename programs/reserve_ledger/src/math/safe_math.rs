use super::*;

/// Checked arithmetic that reports overflow as `MathOverflow` instead of panicking.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

macro_rules! safe_math_impl {
    ($($t:ty),*) => {
        $(
            impl SafeMath for $t {
                #[track_caller]
                fn safe_add(self, rhs: Self) -> Result<Self> {
                    self.checked_add(rhs)
                        .ok_or_else(|| error!(ReserveLedgerError::MathOverflow))
                }

                #[track_caller]
                fn safe_sub(self, rhs: Self) -> Result<Self> {
                    self.checked_sub(rhs)
                        .ok_or_else(|| error!(ReserveLedgerError::MathOverflow))
                }

                #[track_caller]
                fn safe_mul(self, rhs: Self) -> Result<Self> {
                    self.checked_mul(rhs)
                        .ok_or_else(|| error!(ReserveLedgerError::MathOverflow))
                }

                #[track_caller]
                fn safe_div(self, rhs: Self) -> Result<Self> {
                    self.checked_div(rhs)
                        .ok_or_else(|| error!(ReserveLedgerError::MathOverflow))
                }
            }
        )*
    };
}

safe_math_impl!(u32, u64, u128, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_maps_to_math_overflow() {
        let err = u128::MAX.safe_add(1).unwrap_err();
        assert_eq!(err, Error::from(ReserveLedgerError::MathOverflow));
        assert!(0u64.safe_sub(1).is_err());
        assert!(10u64.safe_div(0).is_err());
    }

    #[test]
    fn test_in_range_values_pass_through() {
        assert_eq!(7u128.safe_mul(6).unwrap(), 42);
        assert_eq!(42i64.safe_sub(2).unwrap(), 40);
    }
}

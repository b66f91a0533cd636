use super::*;
use chrono::{NaiveDateTime, Timelike};

/// What the fetch agent hands back to `fulfill_request`.
///
/// A non-empty `error` is an explicit upstream failure and `response` is
/// ignored. Otherwise `response` carries a Borsh encoded [`ReservePayload`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchResponse {
    pub response: Vec<u8>,
    pub error: Vec<u8>,
}

impl FetchResponse {
    pub fn success(payload: &ReservePayload) -> Result<Self> {
        Ok(Self {
            response: payload.encode()?,
            error: Vec::new(),
        })
    }

    pub fn failure(reason: &str) -> Self {
        Self {
            response: Vec::new(),
            error: reason.as_bytes().to_vec(),
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.error.is_empty()
    }
}

/// Decoded custodian report: reserve balance in 18-decimal base units and
/// the observation time in seconds since epoch.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReservePayload {
    pub balance: u128,
    pub observed_at: i64,
}

impl ReservePayload {
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(24);
        self.serialize(&mut buf)
            .map_err(|_| error!(ReserveLedgerError::InvalidPayload))?;
        Ok(buf)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes).map_err(|_| error!(ReserveLedgerError::InvalidPayload))
    }
}

/// Build a payload from the two fields of the custodian's JSON report.
pub fn decode_custodian_record(balance: &str, timestamp: &str) -> Result<ReservePayload> {
    Ok(ReservePayload {
        balance: parse_reserve_amount(balance)?,
        observed_at: parse_report_timestamp(timestamp)?,
    })
}

/// Parse a plain decimal string ("1234.5678") into 18-decimal base units.
pub fn parse_reserve_amount(decimal_str: &str) -> Result<u128> {
    let (integer_str, fractional_str) = match decimal_str.split_once('.') {
        Some((integer, fractional)) => (integer, Some(fractional)),
        None => (decimal_str, None),
    };

    require!(is_ascii_digits(integer_str), ReserveLedgerError::InvalidDecimalAmount);

    let integer_part = integer_str
        .parse::<u128>()
        .map_err(|_| ReserveLedgerError::InvalidDecimalAmount)?;

    let fractional_part = match fractional_str {
        Some(fractional) => {
            require!(
                is_ascii_digits(fractional) && fractional.len() <= TOKEN_DECIMALS as usize,
                ReserveLedgerError::InvalidDecimalAmount
            );
            let digits = fractional
                .parse::<u128>()
                .map_err(|_| ReserveLedgerError::InvalidDecimalAmount)?;
            // "5" after the point is 5 * 10^17, not 5
            digits.safe_mul(10u128.pow(TOKEN_DECIMALS - fractional.len() as u32))?
        }
        None => 0,
    };

    integer_part
        .checked_mul(ONE_TOKEN)
        .and_then(|scaled| scaled.checked_add(fractional_part))
        .ok_or_else(|| error!(ReserveLedgerError::InvalidDecimalAmount))
}

/// Parse `DD-MM-YYYY HH:mm:ss` (UTC) into seconds since epoch.
pub fn parse_report_timestamp(timestamp: &str) -> Result<i64> {
    // chrono accepts single-digit fields and padding; the report never has either
    require!(
        timestamp.len() == REPORT_TIMESTAMP_LEN
            && timestamp
                .bytes()
                .enumerate()
                .all(|(i, b)| matches!(i, 2 | 5 | 10 | 13 | 16) || b.is_ascii_digit()),
        ReserveLedgerError::InvalidTimestampFormat
    );

    let observed = NaiveDateTime::parse_from_str(timestamp, REPORT_TIMESTAMP_FORMAT)
        .map_err(|_| ReserveLedgerError::InvalidTimestampFormat)?;
    // second 60 parses as a leap second
    require!(
        observed.nanosecond() < 1_000_000_000,
        ReserveLedgerError::InvalidTimestampFormat
    );
    Ok(observed.and_utc().timestamp())
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

use super::*;

#[error_code]
pub enum ReserveLedgerError {
    // Authorization
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Caller is not the designated response channel")]
    UnauthorizedResponseChannel,
    #[msg("Signer is not an allowed deployer")]
    UnauthorizedDeployer,

    // Validation
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("Target address must not be the zero address")]
    ZeroAddress,
    #[msg("Cannot transfer to the sending holder")]
    SelfTransfer,
    #[msg("Reserve balance and observation time must both be non-zero")]
    ZeroReserveData,
    #[msg("Reserve observation is timestamped in the future")]
    FutureTimestamp,
    #[msg("Reserve data is stale")]
    StaleData,
    #[msg("Reserve update sequence must be strictly greater than the last accepted one")]
    InvalidSequence,
    #[msg("TTL must be greater than zero")]
    InvalidTtl,
    #[msg("Minimum request interval must be greater than zero")]
    InvalidInterval,
    #[msg("Source tag is too long")]
    SourceTagTooLong,
    #[msg("Request source is invalid or too long")]
    InvalidRequestSource,
    #[msg("Dispatch configuration is invalid")]
    InvalidDispatchConfig,
    #[msg("Correlation token does not match the allocated sequence")]
    InvalidRequestToken,
    #[msg("Reserve payload could not be decoded")]
    InvalidPayload,
    #[msg("Reserve amount is not a valid decimal with at most 18 fractional digits")]
    InvalidDecimalAmount,
    #[msg("Report timestamp is not in DD-MM-YYYY HH:mm:ss form")]
    InvalidTimestampFormat,
    #[msg("Rent receiver does not match the requester")]
    RentReceiverMismatch,

    // Capacity
    #[msg("Issuance cap exceeded")]
    IssuanceCapExceeded,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("The maximum number of role grants has been reached")]
    MaxRoleGrantsReached,
    #[msg("The allow list is full")]
    AllowListFull,
    #[msg("Math Overflow Error")]
    MathOverflow,

    // State
    #[msg("Minting and burning are paused")]
    LedgerPaused,
    #[msg("Target is not on the allow list")]
    NotAllowListed,
    #[msg("Too soon to issue another request")]
    RequestTooSoon,
    #[msg("Unknown request")]
    UnknownRequest,

    // Upstream
    #[msg("The fetch agent reported an upstream failure")]
    UpstreamFailure,
}

/// Coarse classification used by monitoring and by callers deciding
/// whether a failure is worth retrying.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    Validation,
    Capacity,
    State,
    Upstream,
}

impl ReserveLedgerError {
    pub fn kind(&self) -> ErrorKind {
        use ReserveLedgerError::*;
        match self {
            Unauthorized | UnauthorizedResponseChannel | UnauthorizedDeployer => {
                ErrorKind::Authorization
            }
            InvalidAmount
            | ZeroAddress
            | SelfTransfer
            | ZeroReserveData
            | FutureTimestamp
            | StaleData
            | InvalidSequence
            | InvalidTtl
            | InvalidInterval
            | SourceTagTooLong
            | InvalidRequestSource
            | InvalidDispatchConfig
            | InvalidRequestToken
            | InvalidPayload
            | InvalidDecimalAmount
            | InvalidTimestampFormat
            | RentReceiverMismatch => ErrorKind::Validation,
            IssuanceCapExceeded
            | InsufficientBalance
            | MaxRoleGrantsReached
            | AllowListFull
            | MathOverflow => ErrorKind::Capacity,
            LedgerPaused | NotAllowListed | RequestTooSoon | UnknownRequest => ErrorKind::State,
            UpstreamFailure => ErrorKind::Upstream,
        }
    }
}

/// Numeric code carried in events when an error is reported rather than returned.
///
/// Builtin program errors have no `u32` code of their own and map to
/// [`UNCLASSIFIED_ERROR_CODE`].
pub fn error_code_of(err: &Error) -> u32 {
    match err {
        Error::AnchorError(anchor_error) => anchor_error.error_code_number,
        Error::ProgramError(program_error) => match program_error.program_error {
            ProgramError::Custom(code) => code,
            _ => UNCLASSIFIED_ERROR_CODE,
        },
    }
}

/// The `(left, right)` pair attached with `with_values`, rendered as strings.
pub fn compared_values_of(err: &Error) -> Option<[String; 2]> {
    match err {
        Error::AnchorError(anchor_error) => match &anchor_error.compared_values {
            Some(ComparedValues::Values((left, right))) => Some([left.clone(), right.clone()]),
            Some(ComparedValues::Pubkeys((left, right))) => {
                Some([left.to_string(), right.to_string()])
            }
            None => None,
        },
        Error::ProgramError(_) => None,
    }
}

use soroban_sdk::contracterror;

/// Contract error codes, grouped by the hundreds digit into [`ErrorKind`]s.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PresaleError {
    Unauthorized = 101,

    InvalidAmount = 201,
    InvalidGoal = 202,
    InvalidAsset = 203,
    InvalidWindow = 204,
    InvalidSettings = 205,
    ArithmeticOverflow = 206,

    NotInitialized = 301,
    AlreadyInitialized = 302,
    AlreadyEnabled = 303,
    NotOpen = 304,
    GoalAlreadyReached = 305,
    GoalNotReached = 306,
    AlreadySettled = 307,
    WindowNotOpen = 308,
    WindowClosed = 309,

    NoPosition = 401,
    NothingToClaim = 402,

    TransferFailed = 501,
    ApprovalFailed = 502,
    PairCreationFailed = 503,
    LiquidityProvisionFailed = 504,
    BalanceQueryFailed = 505,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    InvalidArgument,
    InvalidState,
    NotFound,
    ExternalCallFailure,
}

impl PresaleError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 / 100 {
            1 => ErrorKind::Authorization,
            2 => ErrorKind::InvalidArgument,
            3 => ErrorKind::InvalidState,
            4 => ErrorKind::NotFound,
            _ => ErrorKind::ExternalCallFailure,
        }
    }
}

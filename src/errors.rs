use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 100,
    NotInitialized = 101,
    InvalidFee = 102,

    Expired = 110,

    AmountInZero = 120,
    ReserveInZero = 121,
    ReserveOutZero = 122,
    InsufficientAmount = 123,
    InsufficientAmountReceived = 124,
    InsufficientOutputAmount = 125,
    InsufficientLiquidity = 126,
    InsufficientLiquidityMinted = 127,
    NoReserves = 128,
    Overflow = 129,
    DivisionByZero = 130,

    InvalidPathLength = 140,
    IdenticalTokens = 141,

    NotOwner = 150,
    Paused = 151,
    AlreadyPaused = 152,
    NotPaused = 153,
    ZeroAddress = 154,
    SameOwner = 155,

    SlippageTooHigh = 160,
}

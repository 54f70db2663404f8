use soroban_sdk::contracterror;

/// Errors shared by every credit-ledger operation.
///
/// All failures abort the invocation before any state is committed, so the
/// ledger is left bit-for-bit unchanged. Every out-of-range condition is a
/// distinct error; amounts are never silently clamped.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    /// Asset is unregistered or its collaterability rate is zero
    AssetNotAccepted = 1,
    /// Amount must be strictly positive
    InvalidAmount = 2,
    /// Requested debt would exceed the collateral value
    OverBorrow = 3,
    /// The credit reserve cannot fund the requested payout
    InsufficientLiquidity = 4,
    /// Account is in default; only liquidation applies
    UserInDefault = 5,
    /// Collateral cannot be reclaimed while any debt is outstanding
    OutstandingDebt = 6,
    /// Repayment value exceeds total debt
    OverRepayment = 7,
    /// Reclaim amount exceeds the deposited balance
    InsufficientCollateral = 8,
    /// Voucher kind has no configured conversion ratio
    UnknownVoucherKind = 9,
    /// Underlying token movement cannot be funded
    TransferFailed = 10,
    /// Caller is not the configured admin
    Unauthorized = 11,
    /// Contract has already been initialized
    AlreadyInitialized = 12,
    /// Contract has not been initialized
    NotInitialized = 13,
    /// Liquidation target is not in default
    NotInDefault = 14,
    /// Overflow occurred during calculation
    Overflow = 15,
    /// Reentrancy detected
    Reentrancy = 16,
}

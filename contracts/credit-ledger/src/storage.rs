//! Storage layout and accessors for the credit ledger.
//!
//! All persisted state lives under a single [`DataKey`] enum:
//! - `Admin` — privileged caller address
//! - `Config` — global ledger parameters ([`LedgerConfig`])
//! - `Collaterability(asset)` — per-asset conversion rate, `RATE_ONE`-scaled
//! - `VoucherRatio(voucher)` — governance tokens per voucher, `RATE_ONE`-scaled
//! - `Position(user)` — per-user collateral balances, principal, debt clock
//!
//! Positions are created implicitly (all-zero) on first interaction and are
//! never deleted.

use soroban_sdk::{contracttype, Address, Env, Map};

use crate::errors::LedgerError;

/// Fixed-point scale for collaterability rates and voucher ratios
/// (7 decimals, matching Stellar asset precision).
pub const RATE_ONE: i128 = 10_000_000;

/// Storage keys for all ledger state.
#[contracttype]
#[derive(Clone)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Global ledger configuration
    Config,
    /// Collaterability rate per asset: credit units per asset unit, RATE_ONE-scaled
    Collaterability(Address),
    /// Voucher conversion ratio: governance tokens per voucher, RATE_ONE-scaled
    VoucherRatio(Address),
    /// Per-user account state
    Position(Address),
}

/// Global ledger parameters, set at initialization and mutated only through
/// the admin interface.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerConfig {
    /// The single borrowable, credit-denominated asset
    pub credit_asset: Address,
    /// Governance token minted by voucher conversion
    pub governance_token: Address,
    /// Recipient of interest payments and liquidated collateral
    pub treasury: Address,
    /// Simple yearly interest rate in whole percent (e.g. 20 = 20%)
    pub yearly_interest_rate_percent: i128,
    /// Maximum debt as a percent of collateral value before lockout
    /// (e.g. 110 = debt may not exceed 110% of collateral value)
    pub default_threshold_percent: i128,
}

/// Per-user account state.
///
/// `debt_clock` is only meaningful while `principal > 0`; it marks the start
/// of the current interest-accrual period.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    /// Collateral balances per asset
    pub collateral: Map<Address, i128>,
    /// Outstanding borrowed amount in credit units, excluding interest
    pub principal: i128,
    /// Timestamp interest accrues from
    pub debt_clock: u64,
}

impl Position {
    pub fn new(env: &Env) -> Self {
        Self {
            collateral: Map::new(env),
            principal: 0,
            debt_clock: 0,
        }
    }
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::Admin)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
}

/// Require that `caller` authorized this invocation and is the ledger admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    let admin = get_admin(env)?;
    if caller != &admin {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

pub fn get_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
}

/// Load a user's position, or a fresh all-zero one if none exists yet.
pub fn get_position(env: &Env, user: &Address) -> Position {
    env.storage()
        .persistent()
        .get(&DataKey::Position(user.clone()))
        .unwrap_or_else(|| Position::new(env))
}

pub fn save_position(env: &Env, user: &Address, position: &Position) {
    env.storage()
        .persistent()
        .set(&DataKey::Position(user.clone()), position);
}

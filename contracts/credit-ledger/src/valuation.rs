//! Valuation and capacity engine.
//!
//! Pure accounting over a position and the registry: collateral value,
//! lazily accrued simple interest, total debt, and the default predicate.
//! Interest is a pure function of `(principal, debt_clock, now)`; there are
//! no scheduled accrual jobs.

use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::storage::{get_config, get_position, DataKey, LedgerConfig, Position, RATE_ONE};

pub const SECONDS_PER_YEAR: u64 = 365 * 86400;

/// Convert `amount` of `asset` into credit units at the registry rate,
/// rounding down. Assets with no (or zero) rate value at zero, so stale
/// collateral can never be overvalued.
pub fn asset_value(env: &Env, asset: &Address, amount: i128) -> Result<i128, LedgerError> {
    let rate: i128 = env
        .storage()
        .persistent()
        .get(&DataKey::Collaterability(asset.clone()))
        .unwrap_or(0);
    amount
        .checked_mul(rate)
        .ok_or(LedgerError::Overflow)?
        .checked_div(RATE_ONE)
        .ok_or(LedgerError::Overflow)
}

/// Total credit-unit value of a position's collateral, rounded down per asset.
pub fn collateral_value(env: &Env, position: &Position) -> Result<i128, LedgerError> {
    let mut total: i128 = 0;
    for (asset, amount) in position.collateral.iter() {
        let value = asset_value(env, &asset, amount)?;
        total = total.checked_add(value).ok_or(LedgerError::Overflow)?;
    }
    Ok(total)
}

/// Simple (non-compounding) interest accrued since the debt clock,
/// rounded down. Zero while the principal is zero.
pub fn accrued_interest(
    env: &Env,
    position: &Position,
    config: &LedgerConfig,
) -> Result<i128, LedgerError> {
    if position.principal == 0 {
        return Ok(0);
    }
    let now = env.ledger().timestamp();
    if now <= position.debt_clock {
        return Ok(0);
    }
    let elapsed = (now - position.debt_clock) as i128;

    // principal * rate% * elapsed / (100 * seconds_per_year), floor
    let numerator = position
        .principal
        .checked_mul(config.yearly_interest_rate_percent)
        .ok_or(LedgerError::Overflow)?
        .checked_mul(elapsed)
        .ok_or(LedgerError::Overflow)?;
    let denominator = 100i128
        .checked_mul(SECONDS_PER_YEAR as i128)
        .ok_or(LedgerError::Overflow)?;
    numerator
        .checked_div(denominator)
        .ok_or(LedgerError::Overflow)
}

/// Principal plus accrued interest.
pub fn total_debt(
    env: &Env,
    position: &Position,
    config: &LedgerConfig,
) -> Result<i128, LedgerError> {
    position
        .principal
        .checked_add(accrued_interest(env, position, config)?)
        .ok_or(LedgerError::Overflow)
}

/// Default predicate: `total_debt * 100 > collateral_value * threshold%`.
///
/// Cross-multiplied so no fractional rounding can bias the comparison.
/// A defaulted account is locked out of borrow, repay, and reclaim; only
/// liquidation applies.
pub fn is_in_default(
    env: &Env,
    position: &Position,
    config: &LedgerConfig,
) -> Result<bool, LedgerError> {
    let debt = total_debt(env, position, config)?;
    if debt == 0 {
        return Ok(false);
    }
    let value = collateral_value(env, position)?;
    let lhs = debt.checked_mul(100).ok_or(LedgerError::Overflow)?;
    let rhs = value
        .checked_mul(config.default_threshold_percent)
        .ok_or(LedgerError::Overflow)?;
    Ok(lhs > rhs)
}

/// Reject the operation for callers already in default.
pub fn require_not_in_default(
    env: &Env,
    position: &Position,
    config: &LedgerConfig,
) -> Result<(), LedgerError> {
    if is_in_default(env, position, config)? {
        return Err(LedgerError::UserInDefault);
    }
    Ok(())
}

/// View helper: collateral value for a user address.
pub fn user_collateral_value(env: &Env, user: &Address) -> Result<i128, LedgerError> {
    let position = get_position(env, user);
    collateral_value(env, &position)
}

/// View helper: accrued interest for a user address.
pub fn user_accrued_interest(env: &Env, user: &Address) -> Result<i128, LedgerError> {
    let config = get_config(env)?;
    let position = get_position(env, user);
    accrued_interest(env, &position, &config)
}

/// View helper: total debt for a user address.
pub fn user_total_debt(env: &Env, user: &Address) -> Result<i128, LedgerError> {
    let config = get_config(env)?;
    let position = get_position(env, user);
    total_debt(env, &position, &config)
}

/// View helper: default status for a user address.
pub fn user_is_in_default(env: &Env, user: &Address) -> Result<bool, LedgerError> {
    let config = get_config(env)?;
    let position = get_position(env, user);
    is_in_default(env, &position, &config)
}

//! Asset registry: per-asset collaterability rates.
//!
//! A rate is the number of credit-asset units one unit of the asset is worth,
//! scaled by [`RATE_ONE`]. Rates are set only by the admin. An absent entry
//! and a zero rate are equivalent from the core's perspective: the asset is
//! not currently valid as collateral, so deposits and repayments with it are
//! rejected.

use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::events::{emit_collaterability_updated, CollaterabilityUpdatedEvent};
use crate::storage::{require_admin, DataKey};

/// Look up an asset's collaterability rate.
///
/// Fails with `AssetNotAccepted` if the asset is unknown or its rate is zero.
pub fn collaterability_of(env: &Env, asset: &Address) -> Result<i128, LedgerError> {
    let rate: i128 = env
        .storage()
        .persistent()
        .get(&DataKey::Collaterability(asset.clone()))
        .unwrap_or(0);
    if rate == 0 {
        return Err(LedgerError::AssetNotAccepted);
    }
    Ok(rate)
}

/// Whether the asset currently has a nonzero collaterability rate.
pub fn is_accepted(env: &Env, asset: &Address) -> bool {
    collaterability_of(env, asset).is_ok()
}

/// Set an asset's collaterability rate (admin only).
///
/// A rate of zero disables the asset for new deposits and repayments while
/// leaving already-deposited balances reclaimable.
pub fn set_collaterability(
    env: &Env,
    caller: Address,
    asset: Address,
    rate: i128,
) -> Result<(), LedgerError> {
    require_admin(env, &caller)?;
    if rate < 0 {
        return Err(LedgerError::InvalidAmount);
    }

    env.storage()
        .persistent()
        .set(&DataKey::Collaterability(asset.clone()), &rate);

    emit_collaterability_updated(
        env,
        CollaterabilityUpdatedEvent {
            actor: caller,
            asset,
            rate,
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(())
}

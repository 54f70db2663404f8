//! Collateral reclaim.
//!
//! Reclaim requires the debt to be fully cleared: any outstanding total debt
//! (principal or accrued interest) blocks all reclaim, there is no pro-rata
//! capacity carve-out. The balance decrease is committed before the asset is
//! transferred back.

use soroban_sdk::{token, Address, Env};

use crate::errors::LedgerError;
use crate::events::{emit_collateral_reclaimed, CollateralReclaimedEvent};
use crate::storage::{get_config, get_position, save_position};
use crate::valuation::{require_not_in_default, total_debt};

/// Return `amount` of `asset` from the user's collateral.
///
/// Returns the user's remaining balance of that asset.
pub fn reclaim_collateral(
    env: &Env,
    user: Address,
    asset: Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    user.require_auth();

    let config = get_config(env)?;
    let mut position = get_position(env, &user);

    require_not_in_default(env, &position, &config)?;

    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    let balance = position.collateral.get(asset.clone()).unwrap_or(0);
    if amount > balance {
        return Err(LedgerError::InsufficientCollateral);
    }
    if total_debt(env, &position, &config)? > 0 {
        return Err(LedgerError::OutstandingDebt);
    }

    let remaining = balance - amount;
    position.collateral.set(asset.clone(), remaining);
    save_position(env, &user, &position);

    // Outbound transfer only after the balance decrease is committed.
    let token_client = token::Client::new(env, &asset);
    token_client.transfer(&env.current_contract_address(), &user, &amount);

    emit_collateral_reclaimed(
        env,
        CollateralReclaimedEvent {
            user,
            asset,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(remaining)
}

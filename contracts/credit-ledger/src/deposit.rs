//! Collateral deposit operations.
//!
//! Inbound transfers are pulled (`transfer_from`, requiring prior approval)
//! before the balance increase is committed; a failed pull aborts the whole
//! invocation with no state change.

use soroban_sdk::{token, Address, Env};

use crate::borrow;
use crate::errors::LedgerError;
use crate::events::{emit_collateral_added, CollateralAddedEvent};
use crate::registry::collaterability_of;
use crate::storage::{get_position, save_position};

/// Deposit `amount` of `asset` as collateral for `user`.
///
/// Returns the user's updated balance of that asset.
pub fn add_collateral(
    env: &Env,
    user: Address,
    asset: Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    user.require_auth();

    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    // Unknown or zero-rate assets are rejected outright; accepting them
    // would lock value that counts for nothing.
    collaterability_of(env, &asset)?;

    let token_client = token::Client::new(env, &asset);
    if token_client.balance(&user) < amount
        || token_client.allowance(&user, &env.current_contract_address()) < amount
    {
        return Err(LedgerError::TransferFailed);
    }
    token_client.transfer_from(
        &env.current_contract_address(),
        &user,
        &env.current_contract_address(),
        &amount,
    );

    let mut position = get_position(env, &user);
    let current = position.collateral.get(asset.clone()).unwrap_or(0);
    let updated = current.checked_add(amount).ok_or(LedgerError::Overflow)?;
    position.collateral.set(asset.clone(), updated);
    save_position(env, &user, &position);

    emit_collateral_added(
        env,
        CollateralAddedEvent {
            user,
            asset,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(updated)
}

/// Deposit then borrow in one atomic operation.
///
/// The freshly deposited collateral counts toward the same borrow's
/// capacity check.
pub fn add_collateral_and_borrow(
    env: &Env,
    user: Address,
    asset: Address,
    collateral_amount: i128,
    borrow_amount: i128,
) -> Result<(), LedgerError> {
    add_collateral(env, user.clone(), asset, collateral_amount)?;
    borrow::borrow_credit(env, user, borrow_amount)?;
    Ok(())
}

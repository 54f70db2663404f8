//! Liquidation of defaulted accounts.
//!
//! Only accounts past the default threshold can be liquidated. The
//! accounting effect: the principal is written off, every collateral
//! balance is zeroed, and the seized assets are transferred to the
//! treasury. Auction and incentive mechanics live outside the ledger;
//! the operation is admin-gated.

use soroban_sdk::{token, Address, Env, Map, Vec};

use crate::errors::LedgerError;
use crate::events::{emit_liquidation, LiquidationEvent};
use crate::storage::{get_config, get_position, require_admin, save_position};
use crate::valuation::{collateral_value, is_in_default};

/// Liquidate `target`'s position, sweeping all collateral to the treasury.
///
/// Returns the credit-unit value of the collateral seized.
pub fn liquidate(env: &Env, caller: Address, target: Address) -> Result<i128, LedgerError> {
    require_admin(env, &caller)?;

    let config = get_config(env)?;
    let mut position = get_position(env, &target);

    if !is_in_default(env, &position, &config)? {
        return Err(LedgerError::NotInDefault);
    }

    let value_seized = collateral_value(env, &position)?;
    let principal_written_off = position.principal;

    // Remember what to sweep, then zero the position before any transfer.
    let mut seized: Vec<(Address, i128)> = Vec::new(env);
    for (asset, amount) in position.collateral.iter() {
        if amount > 0 {
            seized.push_back((asset, amount));
        }
    }
    position.collateral = Map::new(env);
    position.principal = 0;
    save_position(env, &target, &position);

    for (asset, amount) in seized.iter() {
        let token_client = token::Client::new(env, &asset);
        token_client.transfer(&env.current_contract_address(), &config.treasury, &amount);
    }

    emit_liquidation(
        env,
        LiquidationEvent {
            target,
            principal_written_off,
            collateral_value_seized: value_seized,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(value_seized)
}

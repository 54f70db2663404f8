//! Borrowing against posted collateral.
//!
//! The capacity ceiling is exactly 100% of collateral value at borrow time;
//! interest already accrued counts against it. The payout comes from the
//! contract's credit-asset reserve, which is checked separately from the
//! user's own capacity. State is committed before the outbound transfer.

use soroban_sdk::{token, Address, Env};

use crate::errors::LedgerError;
use crate::events::{emit_borrow, BorrowEvent};
use crate::storage::{get_config, get_position, save_position};
use crate::valuation::{collateral_value, require_not_in_default, total_debt};

/// Borrow `amount` of the credit asset against the caller's collateral.
///
/// Returns the user's updated principal.
pub fn borrow_credit(env: &Env, user: Address, amount: i128) -> Result<i128, LedgerError> {
    user.require_auth();

    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let config = get_config(env)?;
    let mut position = get_position(env, &user);

    require_not_in_default(env, &position, &config)?;

    let debt = total_debt(env, &position, &config)?;
    let value = collateral_value(env, &position)?;
    let new_debt = debt.checked_add(amount).ok_or(LedgerError::Overflow)?;
    if new_debt > value {
        return Err(LedgerError::OverBorrow);
    }

    // The reserve is a single shared pool; its shortfall is a distinct
    // failure from the user's own capacity check.
    let credit = token::Client::new(env, &config.credit_asset);
    if credit.balance(&env.current_contract_address()) < amount {
        return Err(LedgerError::InsufficientLiquidity);
    }

    let now = env.ledger().timestamp();
    if position.principal == 0 {
        position.debt_clock = now;
    }
    position.principal = position
        .principal
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    save_position(env, &user, &position);

    // Outbound transfer only after the principal increase is committed.
    credit.transfer(&env.current_contract_address(), &user, &amount);

    emit_borrow(
        env,
        BorrowEvent {
            user,
            amount,
            principal: position.principal,
            timestamp: now,
        },
    );

    Ok(position.principal)
}

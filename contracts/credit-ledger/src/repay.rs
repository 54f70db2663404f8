//! Amortized repayment.
//!
//! A repayment in any accepted asset is valued at the registry rate, applied
//! first against accrued interest (forwarded to the treasury in credit
//! units) and then against principal. The debt clock resets unconditionally
//! on every successful repayment: interest that the payment did not cover is
//! forgiven rather than carried forward. Repayment is blocked once an
//! account is in default; only liquidation applies past that point.

use soroban_sdk::{token, Address, Env};

use crate::errors::LedgerError;
use crate::events::{emit_repay, RepayEvent};
use crate::registry::collaterability_of;
use crate::storage::{get_config, get_position, save_position, RATE_ONE};
use crate::valuation::{accrued_interest, require_not_in_default};

/// Repay debt with `amount` of `asset`.
///
/// Returns `(remaining_debt, interest_paid, principal_paid)` in credit units.
pub fn repay_loan(
    env: &Env,
    user: Address,
    asset: Address,
    amount: i128,
) -> Result<(i128, i128, i128), LedgerError> {
    user.require_auth();

    let config = get_config(env)?;
    let mut position = get_position(env, &user);

    require_not_in_default(env, &position, &config)?;

    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    let rate = collaterability_of(env, &asset)?;

    let value = amount
        .checked_mul(rate)
        .ok_or(LedgerError::Overflow)?
        .checked_div(RATE_ONE)
        .ok_or(LedgerError::Overflow)?;
    // A payment that floors to zero credit units would reset the debt
    // clock without settling anything; reject it.
    if value == 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let interest_due = accrued_interest(env, &position, &config)?;
    let debt = position
        .principal
        .checked_add(interest_due)
        .ok_or(LedgerError::Overflow)?;
    if value > debt {
        // Excess beyond total debt is rejected, not absorbed or refunded.
        return Err(LedgerError::OverRepayment);
    }

    // Pull the repayment into the reserve before any state change.
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

    let interest_paid = value.min(interest_due);
    let principal_paid = value - interest_paid;

    let credit = token::Client::new(env, &config.credit_asset);
    if interest_paid > 0 && credit.balance(&env.current_contract_address()) < interest_paid {
        return Err(LedgerError::InsufficientLiquidity);
    }

    let now = env.ledger().timestamp();
    position.principal = position
        .principal
        .checked_sub(principal_paid)
        .ok_or(LedgerError::Overflow)?;
    // Unconditional reset: any interest not covered by `value` is forgiven.
    position.debt_clock = now;
    save_position(env, &user, &position);

    if interest_paid > 0 {
        credit.transfer(&env.current_contract_address(), &config.treasury, &interest_paid);
    }

    emit_repay(
        env,
        RepayEvent {
            user,
            asset,
            amount,
            value,
            interest_paid,
            principal_paid,
            timestamp: now,
        },
    );

    Ok((position.principal, interest_paid, principal_paid))
}

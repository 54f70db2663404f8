//! Voucher conversion.
//!
//! Legacy voucher tokens convert into the governance token at fixed
//! per-kind ratios set at configuration time. Vouchers are burned from the
//! holder and governance tokens minted in the same invocation; the module
//! shares no mutable state with the lending ledger beyond the governance
//! token's supply. The ledger contract is the governance token's admin.

use soroban_sdk::{token, Address, Env, IntoVal, Symbol};

use crate::errors::LedgerError;
use crate::events::{emit_admin_action, emit_voucher_wrapped, AdminActionEvent, VoucherWrappedEvent};
use crate::storage::{require_admin, DataKey, RATE_ONE};

/// Look up a voucher kind's conversion ratio.
pub fn voucher_ratio(env: &Env, voucher: &Address) -> Result<i128, LedgerError> {
    env.storage()
        .persistent()
        .get(&DataKey::VoucherRatio(voucher.clone()))
        .ok_or(LedgerError::UnknownVoucherKind)
}

/// Configure a voucher kind's conversion ratio (admin only, RATE_ONE-scaled).
pub fn set_voucher_ratio(
    env: &Env,
    caller: Address,
    voucher: Address,
    ratio: i128,
) -> Result<(), LedgerError> {
    require_admin(env, &caller)?;
    if ratio <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    env.storage()
        .persistent()
        .set(&DataKey::VoucherRatio(voucher), &ratio);

    emit_admin_action(
        env,
        AdminActionEvent {
            actor: caller,
            action: Symbol::new(env, "set_voucher_ratio"),
            timestamp: env.ledger().timestamp(),
        },
    );
    Ok(())
}

/// Burn `amount` vouchers from `user` and mint governance tokens at the
/// configured ratio, rounded down.
///
/// Returns the amount of governance tokens minted.
pub fn wrap_voucher(
    env: &Env,
    user: Address,
    voucher: Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    user.require_auth();

    let ratio = voucher_ratio(env, &voucher)?;
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let minted = amount
        .checked_mul(ratio)
        .ok_or(LedgerError::Overflow)?
        .checked_div(RATE_ONE)
        .ok_or(LedgerError::Overflow)?;
    // Fractional ratios can floor to zero; never burn vouchers for nothing.
    if minted == 0 {
        return Err(LedgerError::InvalidAmount);
    }

    let voucher_client = token::Client::new(env, &voucher);
    if voucher_client.balance(&user) < amount
        || voucher_client.allowance(&user, &env.current_contract_address()) < amount
    {
        return Err(LedgerError::TransferFailed);
    }
    // Burned, not parked: the voucher supply shrinks permanently.
    voucher_client.burn_from(&env.current_contract_address(), &user, &amount);

    // The ledger is the governance token's admin; mint authorizes on the
    // contract's own address.
    let config = crate::storage::get_config(env)?;
    env.invoke_contract::<()>(
        &config.governance_token,
        &Symbol::new(env, "mint"),
        (user.clone(), minted).into_val(env),
    );

    emit_voucher_wrapped(
        env,
        VoucherWrappedEvent {
            user,
            voucher,
            amount,
            minted,
            timestamp: env.ledger().timestamp(),
        },
    );

    Ok(minted)
}

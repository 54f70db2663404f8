//! # Credit Ledger Contract
//!
//! A collateralized credit ledger on Soroban. Users deposit accepted assets
//! as collateral, borrow a single credit-denominated asset against the value
//! of that collateral, accrue simple interest, repay with any accepted asset
//! at its fixed conversion rate, and reclaim collateral once the debt is
//! cleared. Accounts past the default threshold are locked out of
//! self-service operations and can only be liquidated. A separate module
//! converts legacy voucher tokens into the governance token at fixed
//! per-kind ratios.
//!
//! Every operation follows checks-effects-interactions: inbound token pulls
//! are verified before the matching state increase, and all state is
//! committed before any outbound transfer.

#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

mod borrow;
mod deposit;
mod errors;
mod events;
mod liquidate;
mod reclaim;
mod reentrancy;
mod registry;
mod repay;
mod storage;
mod valuation;
mod voucher;

#[cfg(test)]
mod tests;

pub use errors::LedgerError;
pub use storage::{LedgerConfig, Position, RATE_ONE};

use events::{emit_admin_action, emit_ledger_params_updated, AdminActionEvent, LedgerParamsUpdatedEvent};
use reentrancy::ReentrancyGuard;
use storage::{get_config, require_admin, set_admin, set_config};

/// Default simple yearly interest rate, in whole percent.
const DEFAULT_INTEREST_RATE_PERCENT: i128 = 20;
/// Default maximum debt as a percent of collateral value before lockout.
const DEFAULT_THRESHOLD_PERCENT: i128 = 110;

#[contract]
pub struct CreditLedgerContract;

#[contractimpl]
impl CreditLedgerContract {
    /// Initialize the ledger with its admin, the credit asset paid out by
    /// borrows, the governance token minted by voucher conversion, and the
    /// treasury that receives interest and liquidated collateral.
    ///
    /// Interest rate and default threshold start at 20% / 110% and can be
    /// changed later through [`Self::set_ledger_params`].
    pub fn initialize(
        env: Env,
        admin: Address,
        credit_asset: Address,
        governance_token: Address,
        treasury: Address,
    ) -> Result<(), LedgerError> {
        if storage::has_admin(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        set_admin(&env, &admin);
        set_config(
            &env,
            &LedgerConfig {
                credit_asset,
                governance_token,
                treasury,
                yearly_interest_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
                default_threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            },
        );
        emit_admin_action(
            &env,
            AdminActionEvent {
                actor: admin,
                action: Symbol::new(&env, "initialize"),
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Transfer admin rights (admin only).
    pub fn transfer_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), LedgerError> {
        require_admin(&env, &caller)?;
        set_admin(&env, &new_admin);
        emit_admin_action(
            &env,
            AdminActionEvent {
                actor: caller,
                action: Symbol::new(&env, "transfer_admin"),
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Update global ledger parameters (admin only). Only provided fields
    /// change; both must be strictly positive.
    pub fn set_ledger_params(
        env: Env,
        caller: Address,
        yearly_interest_rate_percent: Option<i128>,
        default_threshold_percent: Option<i128>,
    ) -> Result<(), LedgerError> {
        require_admin(&env, &caller)?;
        let mut config = get_config(&env)?;
        if let Some(rate) = yearly_interest_rate_percent {
            if rate < 0 {
                return Err(LedgerError::InvalidAmount);
            }
            config.yearly_interest_rate_percent = rate;
        }
        if let Some(threshold) = default_threshold_percent {
            if threshold <= 0 {
                return Err(LedgerError::InvalidAmount);
            }
            config.default_threshold_percent = threshold;
        }
        set_config(&env, &config);
        emit_ledger_params_updated(
            &env,
            LedgerParamsUpdatedEvent {
                actor: caller,
                yearly_interest_rate_percent: config.yearly_interest_rate_percent,
                default_threshold_percent: config.default_threshold_percent,
                timestamp: env.ledger().timestamp(),
            },
        );
        Ok(())
    }

    /// Set an asset's collaterability rate (admin only, RATE_ONE-scaled).
    pub fn set_collaterability(
        env: Env,
        caller: Address,
        asset: Address,
        rate: i128,
    ) -> Result<(), LedgerError> {
        registry::set_collaterability(&env, caller, asset, rate)
    }

    /// Configure a voucher kind's conversion ratio (admin only,
    /// RATE_ONE-scaled governance tokens per voucher).
    pub fn set_voucher_ratio(
        env: Env,
        caller: Address,
        voucher: Address,
        ratio: i128,
    ) -> Result<(), LedgerError> {
        voucher::set_voucher_ratio(&env, caller, voucher, ratio)
    }

    /// Deposit collateral. Returns the user's updated balance of `asset`.
    pub fn add_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        deposit::add_collateral(&env, user, asset, amount)
    }

    /// Deposit collateral and borrow in one atomic operation; the deposit
    /// counts toward the borrow's capacity check.
    pub fn add_collateral_and_borrow(
        env: Env,
        user: Address,
        asset: Address,
        collateral_amount: i128,
        borrow_amount: i128,
    ) -> Result<(), LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        deposit::add_collateral_and_borrow(&env, user, asset, collateral_amount, borrow_amount)
    }

    /// Borrow the credit asset against posted collateral. Returns the
    /// updated principal.
    pub fn borrow(env: Env, user: Address, amount: i128) -> Result<i128, LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        borrow::borrow_credit(&env, user, amount)
    }

    /// Repay debt with any accepted asset. Returns
    /// `(remaining_debt, interest_paid, principal_paid)` in credit units.
    pub fn repay_loan(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<(i128, i128, i128), LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        repay::repay_loan(&env, user, asset, amount)
    }

    /// Reclaim collateral once all debt is cleared. Returns the user's
    /// remaining balance of `asset`.
    pub fn reclaim_collateral(
        env: Env,
        user: Address,
        asset: Address,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        reclaim::reclaim_collateral(&env, user, asset, amount)
    }

    /// Convert vouchers into governance tokens. Returns the minted amount.
    pub fn wrap_voucher(
        env: Env,
        user: Address,
        voucher: Address,
        amount: i128,
    ) -> Result<i128, LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        voucher::wrap_voucher(&env, user, voucher, amount)
    }

    /// Liquidate a defaulted account (admin only), sweeping its collateral
    /// to the treasury. Returns the credit-unit value seized.
    pub fn liquidate(env: Env, caller: Address, target: Address) -> Result<i128, LedgerError> {
        let _guard = ReentrancyGuard::new(&env)?;
        liquidate::liquidate(&env, caller, target)
    }

    // --- Read-only views ---

    /// Credit-unit value of the user's collateral at current rates.
    pub fn user_collateral_value(env: Env, user: Address) -> Result<i128, LedgerError> {
        valuation::user_collateral_value(&env, &user)
    }

    /// Principal plus interest accrued so far.
    pub fn user_total_debt(env: Env, user: Address) -> Result<i128, LedgerError> {
        valuation::user_total_debt(&env, &user)
    }

    /// Interest accrued since the user's debt clock.
    pub fn accrued_interest(env: Env, user: Address) -> Result<i128, LedgerError> {
        valuation::user_accrued_interest(&env, &user)
    }

    /// Whether the user is past the default threshold.
    pub fn is_in_default(env: Env, user: Address) -> Result<bool, LedgerError> {
        valuation::user_is_in_default(&env, &user)
    }

    /// Collaterability rate of `asset`; fails if unknown or zero.
    pub fn collaterability_of_token(env: Env, asset: Address) -> Result<i128, LedgerError> {
        registry::collaterability_of(&env, &asset)
    }

    /// Whether `asset` currently has a nonzero collaterability rate.
    pub fn is_accepted(env: Env, asset: Address) -> bool {
        registry::is_accepted(&env, &asset)
    }

    /// Conversion ratio of a voucher kind; fails if unconfigured.
    pub fn voucher_ratio(env: Env, voucher: Address) -> Result<i128, LedgerError> {
        voucher::voucher_ratio(&env, &voucher)
    }

    /// The user's raw position.
    pub fn get_position(env: Env, user: Address) -> Position {
        storage::get_position(&env, &user)
    }

    /// Current global configuration.
    pub fn get_ledger_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        get_config(&env)
    }

    /// Current admin address.
    pub fn get_admin(env: Env) -> Result<Address, LedgerError> {
        storage::get_admin(&env)
    }
}

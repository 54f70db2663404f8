//! Structured event schema for every state-changing ledger action.
//!
//! Each event is its own `#[contractevent]` struct; the macro derives the
//! snake_case struct name as the leading topic and exposes `.publish(&env)`.
//! `emit_*` helpers give a single call-site per action, invoked only after
//! the corresponding storage writes are committed. All fields are publicly
//! observable state.

use soroban_sdk::{contractevent, Address, Env, Symbol};

/// Emitted when a user deposits collateral.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralAddedEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted when a user borrows the credit asset.
#[contractevent]
#[derive(Clone, Debug)]
pub struct BorrowEvent {
    pub user: Address,
    pub amount: i128,
    pub principal: i128,
    pub timestamp: u64,
}

/// Emitted when a user repays debt.
///
/// `value` is the credit-unit value of the repaid `amount`; it splits into
/// `interest_paid` (forwarded to the treasury) and `principal_paid`.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RepayEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub value: i128,
    pub interest_paid: i128,
    pub principal_paid: i128,
    pub timestamp: u64,
}

/// Emitted when a user reclaims collateral after clearing all debt.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollateralReclaimedEvent {
    pub user: Address,
    pub asset: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Emitted when a defaulted account is liquidated.
#[contractevent]
#[derive(Clone, Debug)]
pub struct LiquidationEvent {
    pub target: Address,
    pub principal_written_off: i128,
    pub collateral_value_seized: i128,
    pub timestamp: u64,
}

/// Emitted when vouchers are converted into governance tokens.
#[contractevent]
#[derive(Clone, Debug)]
pub struct VoucherWrappedEvent {
    pub user: Address,
    pub voucher: Address,
    pub amount: i128,
    pub minted: i128,
    pub timestamp: u64,
}

/// Emitted when an asset's collaterability rate is set or changed.
#[contractevent]
#[derive(Clone, Debug)]
pub struct CollaterabilityUpdatedEvent {
    pub actor: Address,
    pub asset: Address,
    pub rate: i128,
    pub timestamp: u64,
}

/// Emitted when global ledger parameters change.
#[contractevent]
#[derive(Clone, Debug)]
pub struct LedgerParamsUpdatedEvent {
    pub actor: Address,
    pub yearly_interest_rate_percent: i128,
    pub default_threshold_percent: i128,
    pub timestamp: u64,
}

/// Emitted for admin actions without a dedicated event type
/// (initialization, admin transfer, voucher ratio updates).
#[contractevent]
#[derive(Clone, Debug)]
pub struct AdminActionEvent {
    pub actor: Address,
    pub action: Symbol,
    pub timestamp: u64,
}

/// Emit a collateral-added event. Call after the balance increase is stored.
pub fn emit_collateral_added(e: &Env, event: CollateralAddedEvent) {
    event.publish(e);
}

/// Emit a borrow event. Call after the principal increase is stored.
pub fn emit_borrow(e: &Env, event: BorrowEvent) {
    event.publish(e);
}

/// Emit a repay event. Call after the debt reduction is stored.
pub fn emit_repay(e: &Env, event: RepayEvent) {
    event.publish(e);
}

/// Emit a collateral-reclaimed event. Call after the balance decrease is stored.
pub fn emit_collateral_reclaimed(e: &Env, event: CollateralReclaimedEvent) {
    event.publish(e);
}

/// Emit a liquidation event. Call after the position is zeroed.
pub fn emit_liquidation(e: &Env, event: LiquidationEvent) {
    event.publish(e);
}

/// Emit a voucher-wrapped event. Call after the burn and mint complete.
pub fn emit_voucher_wrapped(e: &Env, event: VoucherWrappedEvent) {
    event.publish(e);
}

/// Emit a collaterability-updated event.
pub fn emit_collaterability_updated(e: &Env, event: CollaterabilityUpdatedEvent) {
    event.publish(e);
}

/// Emit a ledger-params-updated event.
pub fn emit_ledger_params_updated(e: &Env, event: LedgerParamsUpdatedEvent) {
    event.publish(e);
}

/// Emit an admin-action event.
pub fn emit_admin_action(e: &Env, event: AdminActionEvent) {
    event.publish(e);
}

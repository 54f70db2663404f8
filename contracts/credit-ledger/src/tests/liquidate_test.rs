//! Default lockout and liquidation tests. Default is entered either by a
//! rate cut on the collateral or by interest accruing past the threshold;
//! once entered, every self-service operation is locked and only the admin
//! can liquidate.

use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::Address;

use crate::errors::LedgerError;
use crate::tests::test_helpers::setup;
use crate::RATE_ONE;

/// Borrow to the limit, then cut the collateral rate so debt is past the
/// 110% threshold.
fn setup_defaulted() -> crate::tests::test_helpers::LedgerFixture {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5500);
    // Value drops from 5500 to 2000; 5500 * 100 > 2000 * 110.
    f.client
        .set_collaterability(&f.admin, &f.collateral_asset, &(100 * RATE_ONE));
    assert!(f.client.is_in_default(&f.user));
    f
}

#[test]
fn default_from_interest_accrual() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5500);
    assert!(!f.client.is_in_default(&f.user));

    // A year at 20% takes the debt well past 110% of 5500.
    f.env.ledger().with_mut(|li| li.timestamp += 365 * 86400);
    assert_eq!(f.client.user_total_debt(&f.user), 6600);
    assert!(f.client.is_in_default(&f.user));
}

#[test]
fn defaulted_user_is_locked_out() {
    let f = setup_defaulted();

    assert_eq!(
        f.client.try_borrow(&f.user, &1),
        Err(Ok(LedgerError::UserInDefault))
    );
    f.approve(&f.user, &f.credit_asset, 5500);
    assert_eq!(
        f.client.try_repay_loan(&f.user, &f.credit_asset, &100),
        Err(Ok(LedgerError::UserInDefault))
    );
    assert_eq!(
        f.client
            .try_reclaim_collateral(&f.user, &f.collateral_asset, &1),
        Err(Ok(LedgerError::UserInDefault))
    );
}

#[test]
fn liquidation_sweeps_collateral_to_treasury() {
    let f = setup_defaulted();

    let value_seized = f.client.liquidate(&f.admin, &f.user);
    assert_eq!(value_seized, 2000);

    // Collateral landed at the treasury, position fully zeroed.
    assert_eq!(f.collateral().balance(&f.treasury), 20);
    assert_eq!(f.client.user_collateral_value(&f.user), 0);
    assert_eq!(f.client.user_total_debt(&f.user), 0);
    assert!(!f.client.is_in_default(&f.user));
}

#[test]
fn liquidated_user_can_start_over() {
    let f = setup_defaulted();
    f.client.liquidate(&f.admin, &f.user);

    f.client.add_collateral(&f.user, &f.collateral_asset, &10);
    assert_eq!(f.client.user_collateral_value(&f.user), 1000);
    assert_eq!(f.client.borrow(&f.user, &500), 500);
}

#[test]
fn liquidating_healthy_account_fails() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);

    let result = f.client.try_liquidate(&f.admin, &f.user);
    assert_eq!(result, Err(Ok(LedgerError::NotInDefault)));
}

#[test]
fn liquidation_requires_admin() {
    let f = setup_defaulted();
    let mallory = Address::generate(&f.env);

    let result = f.client.try_liquidate(&mallory, &f.user);
    assert_eq!(result, Err(Ok(LedgerError::Unauthorized)));
}

#[test]
fn default_boundary_is_strict() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5500);

    // Exactly at the threshold: 6050 * 100 == 5500 * 110.
    // 6050 = 5500 + 550 of interest = half a year at 20%.
    f.env.ledger().with_mut(|li| li.timestamp += 365 * 86400 / 2);
    assert_eq!(f.client.user_total_debt(&f.user), 6050);
    assert!(!f.client.is_in_default(&f.user));

    // One more second of accrual is not enough to move the floor'd
    // interest, so jump a day to cross it.
    f.env.ledger().with_mut(|li| li.timestamp += 86400);
    assert!(f.client.is_in_default(&f.user));
}

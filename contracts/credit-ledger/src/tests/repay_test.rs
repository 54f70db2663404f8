//! Repayment tests: interest-then-principal ordering, the unconditional
//! debt-clock reset (uncovered interest is forgiven), interest forwarding
//! to the treasury, and the over-repayment rejection.

use soroban_sdk::testutils::Ledger;

use crate::errors::LedgerError;
use crate::tests::test_helpers::setup;
use crate::RATE_ONE;

const YEAR: u64 = 365 * 86400;

#[test]
fn repay_principal_with_credit_asset() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);
    f.approve(&f.user, &f.credit_asset, 5000);

    // No time has passed; the whole payment is principal.
    let (remaining, interest_paid, principal_paid) =
        f.client.repay_loan(&f.user, &f.credit_asset, &2000);
    assert_eq!(remaining, 3000);
    assert_eq!(interest_paid, 0);
    assert_eq!(principal_paid, 2000);
    assert_eq!(f.client.user_total_debt(&f.user), 3000);
}

#[test]
fn repay_pays_interest_before_principal() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);

    // One year at 20%: 1000 interest due.
    f.env.ledger().with_mut(|li| li.timestamp += YEAR);
    assert_eq!(f.client.accrued_interest(&f.user), 1000);

    f.approve(&f.user, &f.credit_asset, 5000);
    let treasury_before = f.credit().balance(&f.treasury);
    let (remaining, interest_paid, principal_paid) =
        f.client.repay_loan(&f.user, &f.credit_asset, &1500);

    assert_eq!(interest_paid, 1000);
    assert_eq!(principal_paid, 500);
    assert_eq!(remaining, 4500);
    // Interest forwarded to the treasury in credit units.
    assert_eq!(f.credit().balance(&f.treasury), treasury_before + 1000);
}

#[test]
fn partial_repay_forgives_uncovered_interest() {
    let f = setup();
    // High-rate collateral so the borrow stays far from the threshold.
    let rate = 5500 * RATE_ONE;
    f.client
        .set_collaterability(&f.admin, &f.collateral_asset, &rate);
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &10_000);

    f.env.ledger().with_mut(|li| li.timestamp += YEAR);
    assert_eq!(f.client.accrued_interest(&f.user), 2000);

    // Pay 1000 toward 2000 of interest due.
    f.approve(&f.user, &f.credit_asset, 1000);
    let (remaining, interest_paid, principal_paid) =
        f.client.repay_loan(&f.user, &f.credit_asset, &1000);
    assert_eq!(interest_paid, 1000);
    assert_eq!(principal_paid, 0);
    assert_eq!(remaining, 10_000);

    // The debt clock reset: the uncovered 1000 is gone, not carried.
    assert_eq!(f.client.accrued_interest(&f.user), 0);
    assert_eq!(f.client.user_total_debt(&f.user), 10_000);
}

#[test]
fn repay_with_collateral_asset_values_at_rate() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5500);

    // 2 collateral units are worth 550 credit units.
    f.approve(&f.user, &f.collateral_asset, 2);
    let (remaining, interest_paid, principal_paid) =
        f.client.repay_loan(&f.user, &f.collateral_asset, &2);
    assert_eq!(interest_paid, 0);
    assert_eq!(principal_paid, 550);
    assert_eq!(remaining, 4950);
}

#[test]
fn over_repayment_is_rejected() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);

    f.approve(&f.user, &f.credit_asset, 6000);
    f.credit_sac().mint(&f.user, &1000);
    let result = f.client.try_repay_loan(&f.user, &f.credit_asset, &5001);
    assert_eq!(result, Err(Ok(LedgerError::OverRepayment)));
    // The rejected payment changed nothing.
    assert_eq!(f.client.user_total_debt(&f.user), 5000);
}

#[test]
fn repay_to_zero_allows_full_reclaim() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);

    f.approve(&f.user, &f.credit_asset, 5000);
    let (remaining, _, _) = f.client.repay_loan(&f.user, &f.credit_asset, &5000);
    assert_eq!(remaining, 0);
    assert_eq!(f.client.user_total_debt(&f.user), 0);

    let left = f.client.reclaim_collateral(&f.user, &f.collateral_asset, &20);
    assert_eq!(left, 0);
}

#[test]
fn dust_repayment_cannot_erase_interest() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &5000);

    f.env.ledger().with_mut(|li| li.timestamp += YEAR);
    assert_eq!(f.client.accrued_interest(&f.user), 1000);

    // A sub-unit asset: 1e-7 credit units per unit. One unit of it
    // floors to zero value and must not count as a repayment.
    let dust = f.register_asset();
    f.client.set_collaterability(&f.admin, &dust, &1);
    soroban_sdk::token::StellarAssetClient::new(&f.env, &dust).mint(&f.user, &(2 * RATE_ONE));
    f.approve(&f.user, &dust, 2 * RATE_ONE);

    let result = f.client.try_repay_loan(&f.user, &dust, &1);
    assert_eq!(result, Err(Ok(LedgerError::InvalidAmount)));

    // The debt clock did not reset; interest is still owed in full.
    assert_eq!(f.client.accrued_interest(&f.user), 1000);
    assert_eq!(f.client.user_total_debt(&f.user), 6000);

    // Enough dust units to carry whole value still repays normally:
    // RATE_ONE units are worth exactly 1 credit unit.
    let (_, interest_paid, principal_paid) = f.client.repay_loan(&f.user, &dust, &RATE_ONE);
    assert_eq!(interest_paid, 1);
    assert_eq!(principal_paid, 0);
}

#[test]
fn repay_rejects_unknown_asset() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &100);
    let unknown = f.register_asset();

    let result = f.client.try_repay_loan(&f.user, &unknown, &10);
    assert_eq!(result, Err(Ok(LedgerError::AssetNotAccepted)));
}

#[test]
fn repay_rejects_non_positive_amount() {
    let f = setup();
    f.client.add_collateral(&f.user, &f.collateral_asset, &20);
    f.client.borrow(&f.user, &100);

    assert_eq!(
        f.client.try_repay_loan(&f.user, &f.credit_asset, &0),
        Err(Ok(LedgerError::InvalidAmount))
    );
}

//! Shared test helpers. `setup()` builds a fully wired fixture: ledger
//! contract, a funded credit-asset reserve, one accepted collateral asset,
//! and a governance token whose admin is the ledger contract.

use crate::{CreditLedgerContract, CreditLedgerContractClient, RATE_ONE};
use governance_token::{GovernanceToken, GovernanceTokenClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

/// 1 collateral unit = 275 credit units.
pub const DEFAULT_COLLATERAL_RATE: i128 = 275 * RATE_ONE;
/// Credit-asset reserve minted to the contract at setup.
pub const RESERVE: i128 = 1_000_000;
/// Collateral minted to the user at setup.
pub const USER_COLLATERAL_FUNDS: i128 = 1_000_000;
/// Allowance expiration ledger used by the fixture approvals.
pub const APPROVE_LIVE_UNTIL: u32 = 1000;

pub struct LedgerFixture {
    pub env: Env,
    pub contract_id: Address,
    pub client: CreditLedgerContractClient<'static>,
    pub admin: Address,
    pub treasury: Address,
    pub user: Address,
    pub credit_asset: Address,
    pub collateral_asset: Address,
    pub governance_id: Address,
    pub governance: GovernanceTokenClient<'static>,
}

impl LedgerFixture {
    pub fn credit(&self) -> token::Client<'static> {
        token::Client::new(&self.env, &self.credit_asset)
    }

    pub fn credit_sac(&self) -> token::StellarAssetClient<'static> {
        token::StellarAssetClient::new(&self.env, &self.credit_asset)
    }

    pub fn collateral(&self) -> token::Client<'static> {
        token::Client::new(&self.env, &self.collateral_asset)
    }

    pub fn collateral_sac(&self) -> token::StellarAssetClient<'static> {
        token::StellarAssetClient::new(&self.env, &self.collateral_asset)
    }

    /// Register a fresh Stellar asset contract and return its address.
    pub fn register_asset(&self) -> Address {
        self.env
            .register_stellar_asset_contract_v2(self.admin.clone())
            .address()
    }

    /// Approve the ledger to pull `amount` of `asset` from `from`.
    pub fn approve(&self, from: &Address, asset: &Address, amount: i128) {
        token::Client::new(&self.env, asset).approve(
            from,
            &self.contract_id,
            &amount,
            &APPROVE_LIVE_UNTIL,
        );
    }
}

pub fn setup() -> LedgerFixture {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CreditLedgerContract, ());
    let client = CreditLedgerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let user = Address::generate(&env);

    let governance_id = env.register(GovernanceToken, ());
    let governance = GovernanceTokenClient::new(&env, &governance_id);
    governance.initialize(
        &contract_id,
        &7,
        &String::from_str(&env, "Core Governance"),
        &String::from_str(&env, "CORE"),
    );

    let credit_asset = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let collateral_asset = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    client.initialize(&admin, &credit_asset, &governance_id, &treasury);
    client.set_collaterability(&admin, &collateral_asset, &DEFAULT_COLLATERAL_RATE);
    // The credit asset repays at par.
    client.set_collaterability(&admin, &credit_asset, &RATE_ONE);

    let fixture = LedgerFixture {
        env,
        contract_id,
        client,
        admin,
        treasury,
        user,
        credit_asset,
        collateral_asset,
        governance_id,
        governance,
    };

    fixture.credit_sac().mint(&fixture.contract_id, &RESERVE);
    fixture
        .collateral_sac()
        .mint(&fixture.user, &USER_COLLATERAL_FUNDS);
    let user = fixture.user.clone();
    let collateral_asset = fixture.collateral_asset.clone();
    fixture.approve(&user, &collateral_asset, USER_COLLATERAL_FUNDS);

    fixture
}

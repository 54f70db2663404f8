use soroban_sdk::{contractevent, Address, Env};

#[contractevent]
#[derive(Clone, Debug)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Mint {
    pub admin: Address,
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Burn {
    pub from: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Approve {
    pub from: Address,
    pub spender: Address,
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SetAdmin {
    pub admin: Address,
    pub new_admin: Address,
}

pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
    Transfer { from, to, amount }.publish(e);
}

pub fn mint(e: &Env, admin: Address, to: Address, amount: i128) {
    Mint { admin, to, amount }.publish(e);
}

pub fn burn(e: &Env, from: Address, amount: i128) {
    Burn { from, amount }.publish(e);
}

pub fn approve(e: &Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
    Approve {
        from,
        spender,
        amount,
        expiration_ledger,
    }
    .publish(e);
}

pub fn set_admin(e: &Env, admin: Address, new_admin: Address) {
    SetAdmin { admin, new_admin }.publish(e);
}

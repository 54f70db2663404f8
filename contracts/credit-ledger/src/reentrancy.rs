use soroban_sdk::{Env, Symbol};

use crate::errors::LedgerError;

/// Drop-released lock in temporary storage. Every state-mutating operation
/// takes the guard before touching the ledger, so a callback triggered by an
/// outbound token transfer cannot re-enter mid-operation.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, LedgerError> {
        let key = Symbol::new(env, "REENTRANCY_LOCK");
        if env.storage().temporary().has(&key) {
            return Err(LedgerError::Reentrancy);
        }
        env.storage().temporary().set(&key, &true);
        Ok(Self { env })
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        let key = Symbol::new(self.env, "REENTRANCY_LOCK");
        self.env.storage().temporary().remove(&key);
    }
}

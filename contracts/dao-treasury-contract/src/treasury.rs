use crate::errors::Error;
use crate::types::DataKey;
use soroban_sdk::{token, Address, Env};

/// Treasury holds the native value custodied by the contract. Both execution
/// pathways pay out through [`Treasury::transfer`], which reports a failing
/// token call instead of trapping so the caller can unwind its own state.
pub struct Treasury;

impl Treasury {
    pub fn token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    /// Current value held by the contract.
    pub fn balance(env: &Env) -> Result<i128, Error> {
        let token = Self::token(env)?;
        Ok(token::Client::new(env, &token).balance(&env.current_contract_address()))
    }

    /// Pulls `amount` from `from` into the contract and bumps the running
    /// total-contributions counter. Used by both `join` and direct deposits.
    pub fn receive(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
        if amount <= 0 {
            return Err(Error::InvalidContribution);
        }

        let token = Self::token(env)?;
        token::Client::new(env, &token).transfer(from, &env.current_contract_address(), &amount);

        let total: i128 = env
            .storage()
            .instance()
            .get(&DataKey::TotalContributions)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::TotalContributions, &(total + amount));

        Ok(())
    }

    /// Pays `amount` out to `recipient`. The proposal amount was only checked
    /// against the balance at creation time, so the token call itself can
    /// fail here; that failure is surfaced as `TransferFailed`.
    pub fn transfer(env: &Env, recipient: &Address, amount: i128) -> Result<(), Error> {
        let token = Self::token(env)?;
        let client = token::Client::new(env, &token);

        if client
            .try_transfer(&env.current_contract_address(), recipient, &amount)
            .is_err()
        {
            return Err(Error::TransferFailed);
        }

        Ok(())
    }

    pub fn total_contributions(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalContributions)
            .unwrap_or(0)
    }
}

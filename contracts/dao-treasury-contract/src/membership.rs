use crate::errors::Error;
use crate::events::{self, ContributionIncreased, Delegated, MemberJoined};
use crate::treasury::Treasury;
use crate::types::{DataKey, Member};
use soroban_sdk::{Address, Env};

/// MembershipRegistry tracks who has joined the collective, their cumulative
/// contribution, their voting power, and an optional delegation target.
pub struct MembershipRegistry;

impl MembershipRegistry {
    /// Join the collective (or top up an existing membership) by moving
    /// `amount` of the treasury token into the contract. Voting power grows
    /// one-to-one with contribution and is never reduced by delegation.
    pub fn join(env: &Env, member: &Address, amount: i128) -> Result<(), Error> {
        // Rejects non-positive amounts before anything moves.
        Treasury::receive(env, member, amount)?;

        let key = DataKey::Member(member.clone());
        match env.storage().instance().get::<DataKey, Member>(&key) {
            Some(mut record) => {
                record.contribution += amount;
                record.voting_power += amount;
                env.storage().instance().set(&key, &record);

                env.events().publish(
                    (events::MEMBER, events::INCREASED),
                    ContributionIncreased {
                        member: member.clone(),
                        amount,
                        total_contribution: record.contribution,
                    },
                );
            }
            None => {
                let record = Member {
                    contribution: amount,
                    voting_power: amount,
                    delegate: None,
                };
                env.storage().instance().set(&key, &record);

                env.events().publish(
                    (events::MEMBER, events::JOINED),
                    MemberJoined {
                        member: member.clone(),
                        amount,
                    },
                );
            }
        }

        Ok(())
    }

    /// Point `delegator`'s vote weight at `target`. Neither side's
    /// `voting_power` field changes; the redirection only takes effect when
    /// the delegator's effective power is looked up.
    pub fn delegate(env: &Env, delegator: &Address, target: &Address) -> Result<(), Error> {
        let key = DataKey::Member(delegator.clone());
        let mut record: Member = env
            .storage()
            .instance()
            .get(&key)
            .ok_or(Error::NotAMember)?;

        if target == delegator {
            return Err(Error::SelfDelegation);
        }
        if !Self::is_member(env, target) {
            return Err(Error::DelegateNotMember);
        }

        record.delegate = Some(target.clone());
        env.storage().instance().set(&key, &record);

        env.events().publish(
            (events::MEMBER, events::DELEGATED),
            Delegated {
                delegator: delegator.clone(),
                delegate: target.clone(),
            },
        );

        Ok(())
    }

    /// Effective vote weight of `member`, resolved exactly one hop: a
    /// delegator counts with the delegate's own `voting_power` field, even if
    /// the delegate has delegated further. Non-members weigh zero.
    pub fn effective_voting_power(env: &Env, member: &Address) -> i128 {
        let record = match Self::get(env, member) {
            Some(record) => record,
            None => return 0,
        };

        match record.delegate {
            Some(delegate) => Self::get(env, &delegate)
                .map(|target| target.voting_power)
                .unwrap_or(0),
            None => record.voting_power,
        }
    }

    pub fn get(env: &Env, member: &Address) -> Option<Member> {
        env.storage()
            .instance()
            .get(&DataKey::Member(member.clone()))
    }

    pub fn is_member(env: &Env, member: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Member(member.clone()))
    }

    pub fn require_member(env: &Env, member: &Address) -> Result<(), Error> {
        if !Self::is_member(env, member) {
            return Err(Error::NotAMember);
        }
        Ok(())
    }
}

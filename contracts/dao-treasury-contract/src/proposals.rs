use crate::errors::Error;
use crate::events::{self, ProposalCreated, Voted};
use crate::membership::MembershipRegistry;
use crate::treasury::Treasury;
use crate::types::{DataKey, Proposal, VOTING_PERIOD};
use soroban_sdk::{Address, Env, String};

/// ProposalLedger owns the append-only proposal sequence and the write-once
/// vote records. Proposal ids are sequential starting at 0.
pub struct ProposalLedger;

impl ProposalLedger {
    /// Create a spending proposal. The amount is validated against the
    /// treasury balance once, here; it is deliberately not re-checked at
    /// execution time, so a payout can still fail later if the treasury has
    /// been drained in the meantime.
    pub fn create(
        env: &Env,
        creator: &Address,
        description: String,
        amount: i128,
        recipient: &Address,
    ) -> Result<u32, Error> {
        MembershipRegistry::require_member(env, creator)?;

        if amount > Treasury::balance(env)? {
            return Err(Error::InsufficientFunds);
        }

        let proposal_id = Self::count(env);
        let voting_deadline = env.ledger().timestamp() + VOTING_PERIOD;

        let proposal = Proposal {
            id: proposal_id,
            description,
            amount,
            recipient: recipient.clone(),
            votes_for: 0,
            votes_against: 0,
            voting_deadline,
            approval_count: 0,
            executed: false,
        };
        Self::save(env, &proposal);
        env.storage()
            .instance()
            .set(&DataKey::ProposalCount, &(proposal_id + 1));

        env.events().publish(
            (events::PROPOSAL, events::CREATED),
            ProposalCreated {
                proposal_id,
                creator: creator.clone(),
                amount,
                recipient: recipient.clone(),
                voting_deadline,
            },
        );

        Ok(proposal_id)
    }

    /// Cast a vote. The voter's effective power is snapshotted into the tally
    /// at this moment; later contribution changes do not revisit it, and a
    /// cast vote cannot be revised.
    pub fn vote(
        env: &Env,
        voter: &Address,
        proposal_id: u32,
        support: bool,
    ) -> Result<(), Error> {
        let mut proposal = Self::get(env, proposal_id)?;
        MembershipRegistry::require_member(env, voter)?;

        let key = DataKey::Voted(proposal_id, voter.clone());
        if env.storage().instance().has(&key) {
            return Err(Error::AlreadyVoted);
        }
        if env.ledger().timestamp() > proposal.voting_deadline {
            return Err(Error::VotingClosed);
        }

        let weight = MembershipRegistry::effective_voting_power(env, voter);
        if support {
            proposal.votes_for += weight;
        } else {
            proposal.votes_against += weight;
        }

        env.storage().instance().set(&key, &true);
        Self::save(env, &proposal);

        env.events().publish(
            (events::PROPOSAL, events::VOTED),
            Voted {
                proposal_id,
                voter: voter.clone(),
                support,
                weight,
            },
        );

        Ok(())
    }

    pub fn get(env: &Env, proposal_id: u32) -> Result<Proposal, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Proposal(proposal_id))
            .ok_or(Error::InvalidProposal)
    }

    pub fn save(env: &Env, proposal: &Proposal) {
        env.storage()
            .instance()
            .set(&DataKey::Proposal(proposal.id), proposal);
    }

    pub fn count(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::ProposalCount)
            .unwrap_or(0)
    }

    pub fn has_voted(env: &Env, proposal_id: u32, voter: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Voted(proposal_id, voter.clone()))
    }
}

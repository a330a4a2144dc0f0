use crate::errors::Error;
use crate::events::{self, ApprovalReceived, FundsDistributed, ProposalExecuted};
use crate::membership::MembershipRegistry;
use crate::proposals::ProposalLedger;
use crate::treasury::Treasury;
use crate::types::{DataKey, Proposal};
use soroban_sdk::{Address, Env};

/// ExecutionEngine releases proposal funds through two independent pathways:
/// a majority vote after the voting deadline, or an approval quorum at any
/// time. Both serialize on the proposal's `executed` flag; whichever fires
/// first wins and the other observes `AlreadyExecuted`.
pub struct ExecutionEngine;

impl ExecutionEngine {
    /// Vote-gated release: only after the deadline, and only on a strict
    /// majority. A tie does not pass.
    pub fn execute_by_vote(env: &Env, caller: &Address, proposal_id: u32) -> Result<(), Error> {
        MembershipRegistry::require_member(env, caller)?;

        let mut proposal = ProposalLedger::get(env, proposal_id)?;
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        if env.ledger().timestamp() <= proposal.voting_deadline {
            return Err(Error::VotingStillOpen);
        }
        if proposal.votes_for <= proposal.votes_against {
            return Err(Error::ProposalRejected);
        }

        Self::release(env, &mut proposal)?;

        env.events().publish(
            (events::PROPOSAL, events::EXECUTED),
            ProposalExecuted {
                proposal_id,
                recipient: proposal.recipient,
                amount: proposal.amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    /// Record an approval for the quorum pathway. Approvals ignore the voting
    /// deadline and the vote tally entirely.
    pub fn approve(env: &Env, approver: &Address, proposal_id: u32) -> Result<(), Error> {
        MembershipRegistry::require_member(env, approver)?;

        let mut proposal = ProposalLedger::get(env, proposal_id)?;
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }

        let key = DataKey::Approved(proposal_id, approver.clone());
        if env.storage().instance().has(&key) {
            return Err(Error::AlreadyApproved);
        }

        env.storage().instance().set(&key, &true);
        proposal.approval_count += 1;
        ProposalLedger::save(env, &proposal);

        env.events().publish(
            (events::PROPOSAL, events::APPROVED),
            ApprovalReceived {
                proposal_id,
                approver: approver.clone(),
                approval_count: proposal.approval_count,
            },
        );

        Ok(())
    }

    /// Quorum-gated release: fires as soon as enough distinct members have
    /// approved, regardless of votes or deadline.
    pub fn distribute(env: &Env, caller: &Address, proposal_id: u32) -> Result<(), Error> {
        MembershipRegistry::require_member(env, caller)?;

        let mut proposal = ProposalLedger::get(env, proposal_id)?;
        if proposal.executed {
            return Err(Error::AlreadyExecuted);
        }
        if proposal.approval_count < Self::required_approvals(env)? {
            return Err(Error::InsufficientApprovals);
        }

        Self::release(env, &mut proposal)?;

        env.events().publish(
            (events::TREASURY, events::PAID),
            FundsDistributed {
                proposal_id,
                recipient: proposal.recipient,
                amount: proposal.amount,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }

    pub fn required_approvals(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::RequiredApprovals)
            .ok_or(Error::NotInitialized)
    }

    pub fn has_approved(env: &Env, proposal_id: u32, approver: &Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Approved(proposal_id, approver.clone()))
    }

    /// Mark the proposal executed, then pay out. The flag flip is the mutual
    /// exclusion point between the two pathways; if the payout fails it is
    /// reverted in storage before the error surfaces, leaving the proposal
    /// eligible for a later attempt.
    fn release(env: &Env, proposal: &mut Proposal) -> Result<(), Error> {
        proposal.executed = true;
        ProposalLedger::save(env, proposal);

        if let Err(err) = Treasury::transfer(env, &proposal.recipient, proposal.amount) {
            proposal.executed = false;
            ProposalLedger::save(env, proposal);
            return Err(err);
        }

        Ok(())
    }
}

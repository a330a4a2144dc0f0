#![no_std]

pub mod errors;
pub mod events;
pub mod execution;
pub mod membership;
pub mod proposals;
pub mod treasury;
pub mod types;


use soroban_sdk::{contract, contractimpl, Address, Env, String};

use errors::Error;
use execution::ExecutionEngine;
use membership::MembershipRegistry;
use proposals::ProposalLedger;
use treasury::Treasury;
use types::{DataKey, Member, Proposal};

pub trait DaoTreasuryTrait {
    // Initialization function
    fn initialize(env: Env, token: Address, required_approvals: u32) -> Result<(), Error>;

    // Membership functions
    fn join(env: Env, member: Address, amount: i128) -> Result<(), Error>;
    fn delegate(env: Env, delegator: Address, target: Address) -> Result<(), Error>;

    // Proposal lifecycle functions
    fn create_proposal(
        env: Env,
        creator: Address,
        description: String,
        amount: i128,
        recipient: Address,
    ) -> Result<u32, Error>;
    fn vote(env: Env, voter: Address, proposal_id: u32, support: bool) -> Result<(), Error>;

    // Execution functions
    fn execute_by_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error>;
    fn approve(env: Env, approver: Address, proposal_id: u32) -> Result<(), Error>;
    fn distribute(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error>;

    // Treasury functions
    fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error>;

    // View functions
    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error>;
    fn get_proposal_count(env: Env) -> u32;
    fn get_member(env: Env, member: Address) -> Option<Member>;
    fn get_voting_power(env: Env, member: Address) -> i128;
    fn is_member(env: Env, member: Address) -> bool;
    fn has_voted(env: Env, proposal_id: u32, voter: Address) -> bool;
    fn has_approved(env: Env, proposal_id: u32, approver: Address) -> bool;
    fn get_balance(env: Env) -> Result<i128, Error>;
    fn get_total_contributions(env: Env) -> i128;
    fn get_required_approvals(env: Env) -> Result<u32, Error>;
}

#[contract]
pub struct DaoTreasury;

#[contractimpl]
impl DaoTreasuryTrait for DaoTreasury {
    fn initialize(env: Env, token: Address, required_approvals: u32) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Token, &token);
        env.storage()
            .instance()
            .set(&DataKey::RequiredApprovals, &required_approvals);

        Ok(())
    }

    fn join(env: Env, member: Address, amount: i128) -> Result<(), Error> {
        member.require_auth();
        MembershipRegistry::join(&env, &member, amount)
    }

    fn delegate(env: Env, delegator: Address, target: Address) -> Result<(), Error> {
        delegator.require_auth();
        MembershipRegistry::delegate(&env, &delegator, &target)
    }

    fn create_proposal(
        env: Env,
        creator: Address,
        description: String,
        amount: i128,
        recipient: Address,
    ) -> Result<u32, Error> {
        creator.require_auth();
        ProposalLedger::create(&env, &creator, description, amount, &recipient)
    }

    fn vote(env: Env, voter: Address, proposal_id: u32, support: bool) -> Result<(), Error> {
        voter.require_auth();
        ProposalLedger::vote(&env, &voter, proposal_id, support)
    }

    fn execute_by_vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error> {
        caller.require_auth();
        ExecutionEngine::execute_by_vote(&env, &caller, proposal_id)
    }

    fn approve(env: Env, approver: Address, proposal_id: u32) -> Result<(), Error> {
        approver.require_auth();
        ExecutionEngine::approve(&env, &approver, proposal_id)
    }

    fn distribute(env: Env, caller: Address, proposal_id: u32) -> Result<(), Error> {
        caller.require_auth();
        ExecutionEngine::distribute(&env, &caller, proposal_id)
    }

    fn deposit(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        Treasury::receive(&env, &from, amount)
    }

    fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, Error> {
        ProposalLedger::get(&env, proposal_id)
    }

    fn get_proposal_count(env: Env) -> u32 {
        ProposalLedger::count(&env)
    }

    fn get_member(env: Env, member: Address) -> Option<Member> {
        MembershipRegistry::get(&env, &member)
    }

    fn get_voting_power(env: Env, member: Address) -> i128 {
        MembershipRegistry::effective_voting_power(&env, &member)
    }

    fn is_member(env: Env, member: Address) -> bool {
        MembershipRegistry::is_member(&env, &member)
    }

    fn has_voted(env: Env, proposal_id: u32, voter: Address) -> bool {
        ProposalLedger::has_voted(&env, proposal_id, &voter)
    }

    fn has_approved(env: Env, proposal_id: u32, approver: Address) -> bool {
        ExecutionEngine::has_approved(&env, proposal_id, &approver)
    }

    fn get_balance(env: Env) -> Result<i128, Error> {
        Treasury::balance(&env)
    }

    fn get_total_contributions(env: Env) -> i128 {
        Treasury::total_contributions(&env)
    }

    fn get_required_approvals(env: Env) -> Result<u32, Error> {
        ExecutionEngine::required_approvals(&env)
    }
}

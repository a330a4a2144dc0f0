use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol representing membership events.
pub const MEMBER: Symbol = symbol_short!("MEMBER");

// Symbol representing proposal lifecycle events.
pub const PROPOSAL: Symbol = symbol_short!("PROPOSAL");

// Symbol representing treasury events.
pub const TREASURY: Symbol = symbol_short!("TREASURY");

pub const JOINED: Symbol = symbol_short!("JOINED");
pub const INCREASED: Symbol = symbol_short!("INCREASED");
pub const DELEGATED: Symbol = symbol_short!("DELEGATED");
pub const CREATED: Symbol = symbol_short!("CREATED");
pub const VOTED: Symbol = symbol_short!("VOTED");
pub const EXECUTED: Symbol = symbol_short!("EXECUTED");
pub const APPROVED: Symbol = symbol_short!("APPROVED");
pub const PAID: Symbol = symbol_short!("PAID");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberJoined {
    pub member: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionIncreased {
    pub member: Address,
    pub amount: i128,
    pub total_contribution: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Delegated {
    pub delegator: Address,
    pub delegate: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalCreated {
    pub proposal_id: u32,
    pub creator: Address,
    pub amount: i128,
    pub recipient: Address,
    pub voting_deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voted {
    pub proposal_id: u32,
    pub voter: Address,
    pub support: bool,
    pub weight: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProposalExecuted {
    pub proposal_id: u32,
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalReceived {
    pub proposal_id: u32,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsDistributed {
    pub proposal_id: u32,
    pub recipient: Address,
    pub amount: i128,
    pub timestamp: u64,
}

use soroban_sdk::{contracttype, Address, String};

/// How long a proposal accepts votes after creation, in seconds.
pub const VOTING_PERIOD: u64 = 7 * 24 * 60 * 60;

/// Enum representing keys used to store contract data in Soroban storage.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Token,                  // Address of the treasury token contract
    RequiredApprovals,      // Approval quorum for distribute
    TotalContributions,     // Running total of all value received
    ProposalCount,          // Number of proposals, doubles as the next id
    Member(Address),        // Member address -> Member
    Proposal(u32),          // Proposal ID -> Proposal
    Voted(u32, Address),    // (Proposal ID, voter) -> vote marker
    Approved(u32, Address), // (Proposal ID, approver) -> approval marker
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Member {
    pub contribution: i128,
    pub voting_power: i128,
    pub delegate: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u32,
    pub description: String,
    pub amount: i128,
    pub recipient: Address,
    pub votes_for: i128,
    pub votes_against: i128,
    pub voting_deadline: u64, // Ledger timestamp
    pub approval_count: u32,
    pub executed: bool,
}

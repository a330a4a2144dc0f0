use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Initialization Errors
    AlreadyInitialized = 1,
    NotInitialized = 2,
    // Membership Errors
    InvalidContribution = 101,
    NotAMember = 102,
    SelfDelegation = 103,
    DelegateNotMember = 104,
    // Proposal Errors
    InvalidProposal = 201,
    InsufficientFunds = 202,
    // Voting Errors
    AlreadyVoted = 301,
    VotingClosed = 302,
    // Execution Errors
    VotingStillOpen = 401,
    ProposalRejected = 402,
    AlreadyExecuted = 403,
    AlreadyApproved = 404,
    InsufficientApprovals = 405,
    TransferFailed = 406,
}

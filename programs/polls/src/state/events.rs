use anchor_lang::prelude::*;

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub title: String,
    pub creator: Pubkey,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    /// Index into the poll's options, in creation order
    pub option_index: u8,
    pub voter: Pubkey,
}

#[event]
pub struct PollEnded {
    pub poll_id: u64,
    pub closed_by: Pubkey,
}

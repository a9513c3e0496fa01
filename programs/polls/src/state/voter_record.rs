use anchor_lang::prelude::*;

/// Marks that one identity has voted in one poll.
///
/// Lives at the PDA `["voter", poll address, voter key]`, so each poll has
/// its own voter set and a voter's history never carries across polls.
/// Which option was chosen is not recorded.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VoterRecord {
    /// PDA bump seed
    pub bump: u8,
    pub has_voted: bool,
}

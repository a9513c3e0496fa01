use anchor_lang::prelude::*;

use crate::ErrorCode;

/// Singleton account allocating poll identifiers.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct PollRegistry {
    /// PDA bump seed
    pub bump: u8,
    /// Highest identifier allocated so far, 0 before the first poll
    pub poll_count: u64,
}

impl PollRegistry {
    /// Identifier the next created poll will receive.
    pub fn next_poll_id(&self) -> Result<u64> {
        self.poll_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::CounterOverflow))
    }

    /// Allocates and returns the next identifier. Ids start at 1 and have no gaps.
    pub fn allocate(&mut self) -> Result<u64> {
        let id = self.next_poll_id()?;
        self.poll_count = id;
        Ok(id)
    }
}

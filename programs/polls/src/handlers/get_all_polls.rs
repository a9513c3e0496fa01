use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{PollListing, PollRegistry},
};

/// Poll accounts to list are passed as remaining accounts, in id order
/// starting at `start_id`.
#[derive(Accounts)]
pub struct GetAllPolls<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PollRegistry>,
}

/// Lists poll ids and titles in ascending id order.
///
/// Passing every poll from id 1 returns the full listing. Larger registries
/// are read in pages of at most `MAX_LISTING_PAGE` polls, using the returned
/// `poll_count` to know when to stop.
pub fn list_polls(ctx: Context<GetAllPolls>, start_id: u64) -> Result<PollListing> {
    PollListing::from_accounts(
        ctx.accounts.registry.poll_count,
        start_id,
        ctx.remaining_accounts,
    )
}

use anchor_lang::prelude::*;

use crate::{
    constants::*,
    state::{Poll, PollCreated, PollRegistry},
};

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, PollRegistry>,

    #[account(
        init,
        payer = creator,
        space = 8 + Poll::INIT_SPACE,
        seeds = [POLL_SEED, registry.poll_count.saturating_add(1).to_le_bytes().as_ref()],
        bump,
    )]
    pub poll_acc: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

/// Creates a new poll owned by the signer.
///
/// The poll receives the next sequential identifier, starts active, and holds
/// one zeroed counter per option in the order given. A rejected call
/// allocates nothing: the registry counter only advances when the whole
/// transaction commits.
///
/// # Arguments
/// * `title` - The poll question (max 64 bytes)
/// * `options` - Between 2 and 10 option descriptions (max 32 bytes each)
///
/// # Returns
/// The identifier of the new poll
pub fn open_poll(ctx: Context<CreatePoll>, title: String, options: Vec<String>) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let poll_id = ctx.accounts.registry.next_poll_id()?;

    msg!("Creating poll {} with {} options", poll_id, options.len());

    ctx.accounts
        .poll_acc
        .open(poll_id, creator, title.clone(), options, ctx.bumps.poll_acc)?;
    ctx.accounts.registry.allocate()?;

    emit!(PollCreated {
        poll_id,
        title,
        creator,
    });

    Ok(poll_id)
}

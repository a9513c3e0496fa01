use anchor_lang::prelude::*;

use crate::{constants::*, state::PollRegistry};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + PollRegistry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, PollRegistry>,

    pub system_program: Program<'info, System>,
}

/// One-off job to create the registry that allocates poll identifiers.
///
/// Must be called once before the first `create_poll`. A second call fails
/// because the registry account already exists.
pub fn init_registry(ctx: Context<Initialize>) -> Result<()> {
    msg!("Initializing poll registry");

    let registry = &mut ctx.accounts.registry;
    registry.bump = ctx.bumps.registry;
    registry.poll_count = 0;

    Ok(())
}

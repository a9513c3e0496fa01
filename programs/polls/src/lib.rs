// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ErrorCode;
pub use handlers::*;
pub use state::*;

declare_id!("E3kEuaAHn4odFYfZbuf6FAKs6ythqwbFroqtXar3Wvjs");

#[program]
pub mod polls {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::initialize::init_registry(ctx)
    }

    pub fn create_poll(
        ctx: Context<CreatePoll>,
        title: String,
        options: Vec<String>,
    ) -> Result<u64> {
        handlers::create_poll::open_poll(ctx, title, options)
    }

    pub fn vote(ctx: Context<Vote>, poll_id: u64, option_index: u8) -> Result<()> {
        handlers::vote::cast_vote(ctx, poll_id, option_index)
    }

    pub fn end_poll(ctx: Context<EndPoll>, poll_id: u64) -> Result<()> {
        handlers::end_poll::close_poll(ctx, poll_id)
    }

    // Read-only instructions. Results are returned as instruction return data,
    // typically fetched with a simulated transaction.

    pub fn get_poll(ctx: Context<ReadPoll>, poll_id: u64) -> Result<PollView> {
        handlers::read_poll::read_poll(ctx, poll_id)
    }

    pub fn get_poll_creator(ctx: Context<ReadPoll>, poll_id: u64) -> Result<Pubkey> {
        handlers::read_poll::read_poll_creator(ctx, poll_id)
    }

    pub fn get_all_polls(ctx: Context<GetAllPolls>, start_id: u64) -> Result<PollListing> {
        handlers::get_all_polls::list_polls(ctx, start_id)
    }
}

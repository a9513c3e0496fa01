use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::VoterRecord;
use crate::ErrorCode;

/// One selectable answer and its running tally.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq, InitSpace)]
pub struct PollOption {
    #[max_len(32)]
    pub description: String,
    pub vote_count: u64,
}

/// A poll with a fixed, ordered list of options.
///
/// Stored at the PDA `["poll", id as little-endian u64]`. The account is sized
/// for the largest allowed poll when created and is never closed.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Poll {
    /// PDA bump seed
    pub bump: u8,
    /// Sequential identifier assigned by the registry
    pub id: u64,
    /// Signer that created the poll, the only key allowed to end it
    pub creator: Pubkey,
    /// True from creation until the creator ends the poll
    pub active: bool,
    /// The poll question (max 64 bytes)
    #[max_len(64)]
    pub title: String,
    /// Between 2 and 10 options, in creation order
    #[max_len(10)]
    pub options: Vec<PollOption>,
}

impl Poll {
    /// Checks the creation arguments without touching any state.
    pub fn validate(title: &str, options: &[String]) -> Result<()> {
        require!(
            (MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()),
            ErrorCode::InvalidOptionCount
        );
        require!(title.len() <= MAX_TITLE_LEN, ErrorCode::TitleTooLong);
        require!(
            options.iter().all(|option| option.len() <= MAX_OPTION_LEN),
            ErrorCode::OptionTooLong
        );
        Ok(())
    }

    /// Fills a freshly allocated poll account. Every option starts at zero votes.
    pub fn open(
        &mut self,
        id: u64,
        creator: Pubkey,
        title: String,
        options: Vec<String>,
        bump: u8,
    ) -> Result<()> {
        Self::validate(&title, &options)?;

        self.bump = bump;
        self.id = id;
        self.creator = creator;
        self.active = true;
        self.title = title;
        self.options = options
            .into_iter()
            .map(|description| PollOption {
                description,
                vote_count: 0,
            })
            .collect();

        Ok(())
    }

    /// Counts one vote for `option_index` and marks `ballot` as used.
    ///
    /// Checks run in a fixed order and the first failure is reported: the poll
    /// must be active, the ballot unused, then the index in range. Nothing is
    /// modified unless every check passes.
    pub fn record_vote(&mut self, ballot: &mut VoterRecord, option_index: u8) -> Result<()> {
        require!(self.active, ErrorCode::PollClosedOrMissing);
        require!(!ballot.has_voted, ErrorCode::AlreadyVoted);

        let option = self
            .options
            .get_mut(usize::from(option_index))
            .ok_or_else(|| error!(ErrorCode::InvalidOption))?;
        option.vote_count = option
            .vote_count
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::CounterOverflow))?;
        ballot.has_voted = true;

        Ok(())
    }

    /// Ends the poll on behalf of `caller`. There is no way to reopen it.
    pub fn close(&mut self, caller: &Pubkey) -> Result<()> {
        require!(self.active, ErrorCode::AlreadyClosed);
        require_keys_eq!(*caller, self.creator, ErrorCode::NotAuthorized);

        self.active = false;
        Ok(())
    }

    pub fn view(&self) -> PollView {
        PollView {
            title: self.title.clone(),
            active: self.active,
            option_descriptions: self
                .options
                .iter()
                .map(|option| option.description.clone())
                .collect(),
            option_counts: self.options.iter().map(|option| option.vote_count).collect(),
        }
    }

    /// Decodes a poll from raw account data, or `None` if the account is not
    /// a poll owned by this program (including a PDA that was never created).
    pub fn decode(owner: &Pubkey, mut data: &[u8]) -> Option<Self> {
        if *owner != crate::ID {
            return None;
        }
        Self::try_deserialize(&mut data).ok()
    }

    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        let data = info.try_borrow_data()?;
        Ok(Self::decode(info.owner, &data[..]))
    }

    /// Writes the poll back into `info`, which must be the account it was loaded from.
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// Counts one vote in the poll stored at `info` and writes it back.
    /// A poll that was never created reports `PollClosedOrMissing`.
    pub fn cast_vote(info: &AccountInfo, ballot: &mut VoterRecord, option_index: u8) -> Result<Self> {
        let mut poll = Self::load(info)?.ok_or_else(|| error!(ErrorCode::PollClosedOrMissing))?;
        poll.record_vote(ballot, option_index)?;
        poll.store(info)?;
        Ok(poll)
    }

    /// Ends the poll stored at `info` on behalf of `caller` and writes it back.
    /// A poll that was never created reports `AlreadyClosed`.
    pub fn end(info: &AccountInfo, caller: &Pubkey) -> Result<Self> {
        let mut poll = Self::load(info)?.ok_or_else(|| error!(ErrorCode::AlreadyClosed))?;
        poll.close(caller)?;
        poll.store(info)?;
        Ok(poll)
    }

    pub fn read_view(info: &AccountInfo) -> Result<PollView> {
        Ok(Self::load(info)?.map(|poll| poll.view()).unwrap_or_default())
    }

    pub fn read_creator(info: &AccountInfo) -> Result<Pubkey> {
        Ok(Self::load(info)?.map(|poll| poll.creator).unwrap_or_default())
    }
}

/// Read model returned by `get_poll`. A poll that was never created reads as
/// `PollView::default()`: empty title, inactive, no options.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct PollView {
    pub title: String,
    pub active: bool,
    pub option_descriptions: Vec<String>,
    pub option_counts: Vec<u64>,
}

/// One page of polls in ascending id order, returned by `get_all_polls`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct PollListing {
    /// Registry counter at the time of the read
    pub poll_count: u64,
    pub poll_ids: Vec<u64>,
    pub titles: Vec<String>,
}

impl PollListing {
    /// Builds a page from the polls supplied for ids `start_id, start_id + 1, ...`.
    /// A `start_id` of 0 is treated as 1.
    ///
    /// Each entry must be the poll with the expected id, and the page may not
    /// run past `poll_count`.
    pub fn build(poll_count: u64, start_id: u64, polls: Vec<Option<Poll>>) -> Result<Self> {
        require!(
            polls.len() <= MAX_LISTING_PAGE,
            ErrorCode::ListingPageTooLarge
        );

        let first = start_id.max(1);
        let mut listing = PollListing {
            poll_count,
            poll_ids: Vec::with_capacity(polls.len()),
            titles: Vec::with_capacity(polls.len()),
        };

        for (offset, poll) in polls.into_iter().enumerate() {
            let poll_id = first
                .checked_add(offset as u64)
                .filter(|id| *id <= poll_count)
                .ok_or_else(|| error!(ErrorCode::PollAccountMismatch))?;
            let poll = poll.ok_or_else(|| error!(ErrorCode::PollAccountMismatch))?;
            require!(poll.id == poll_id, ErrorCode::PollAccountMismatch);

            listing.poll_ids.push(poll_id);
            listing.titles.push(poll.title);
        }

        Ok(listing)
    }

    /// Same as [`PollListing::build`], reading each poll from its account.
    pub fn from_accounts(poll_count: u64, start_id: u64, accounts: &[AccountInfo]) -> Result<Self> {
        let polls = accounts
            .iter()
            .map(Poll::load)
            .collect::<Result<Vec<_>>>()?;

        Self::build(poll_count, start_id, polls)
    }
}

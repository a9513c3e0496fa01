// PDA seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const POLL_SEED: &[u8] = b"poll";
pub const VOTER_SEED: &[u8] = b"voter";

// Poll shape. Account space is sized from these at creation, so the
// `max_len` attributes on `Poll` and `PollOption` must match.
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_OPTION_LEN: usize = 32;

/// Largest listing that fits in the 1024 bytes of Solana return data
/// with maximum-length titles.
pub const MAX_LISTING_PAGE: usize = 12;

/// Seed prefix for offer PDAs; combined with the offer id it fixes the
/// record's address for anyone who knows the id.
pub const OFFER_SEED: &[u8] = b"offer";

/// Every Anchor account starts with an 8-byte discriminator.
pub const ANCHOR_DISCRIMINATOR: usize = 8;

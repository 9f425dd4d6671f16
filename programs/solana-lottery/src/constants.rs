use anchor_lang::prelude::*;
/// Constants module for the lottery program
///
/// Contains the PDA seed tags and account sizing values.

/// Length of the Anchor account discriminator prefixed to every record
pub const DISCRIMINATOR_LEN: usize = 8;

/// Seeds for PDA derivation

/// Seed for the master registry PDA
#[constant]
pub const MASTER_SEED: &[u8] = b"master";

/// Seed for lottery PDAs, followed by the lottery id (u32, little-endian)
#[constant]
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed for ticket PDAs, followed by the lottery address and the ticket id (u32, little-endian)
#[constant]
pub const TICKET_SEED: &[u8] = b"ticket";

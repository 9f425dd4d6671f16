/// Address derivation for every record the program owns
///
/// Seed encoding per tag:
/// - master:  `MASTER_SEED`
/// - lottery: `LOTTERY_SEED`, lottery id (u32, little-endian)
/// - ticket:  `TICKET_SEED`, lottery address, ticket id (u32, little-endian)
///
/// The instruction contexts enforce the same seeds through Anchor `seeds`
/// constraints; these functions let clients compute addresses without a lookup.
use anchor_lang::prelude::*;

use crate::{constants::*, errors::LotteryError};

/// Fixed-width encoding used for every id seed
pub fn id_seed(id: u32) -> [u8; 4] {
    id.to_le_bytes()
}

/// Address and bump of the master registry
pub fn find_master_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(&[MASTER_SEED], program_id)
}

/// Address and bump of the lottery with `lottery_id`
pub fn find_lottery_address(program_id: &Pubkey, lottery_id: u32) -> Result<(Pubkey, u8)> {
    derive(&[LOTTERY_SEED, &id_seed(lottery_id)], program_id)
}

/// Address and bump of ticket `ticket_id` in the lottery stored at `lottery`
pub fn find_ticket_address(
    program_id: &Pubkey,
    lottery: &Pubkey,
    ticket_id: u32,
) -> Result<(Pubkey, u8)> {
    derive(
        &[TICKET_SEED, lottery.as_ref(), &id_seed(ticket_id)],
        program_id,
    )
}

fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(LotteryError::DerivationExhausted))
}

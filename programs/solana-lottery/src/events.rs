/// Events module for the lottery program
/// Contains all event structures that are emitted by the program instructions
/// for off-chain tracking and monitoring.
use anchor_lang::prelude::*;

/// Emitted when the master registry is created
#[event]
pub struct MasterInitialized {
    pub master: Pubkey,
    pub payer: Pubkey,
}

/// Emitted when a new lottery is opened
#[event]
pub struct LotteryCreated {
    pub lottery: Pubkey,
    pub lottery_id: u32,
    pub authority: Pubkey,
    pub ticket_price: u64,
}

/// Emitted when a ticket is bought
#[event]
pub struct TicketPurchased {
    pub lottery: Pubkey,
    pub lottery_id: u32,
    pub ticket: Pubkey,
    pub ticket_id: u32,
    pub buyer: Pubkey,
    pub price: u64,
}

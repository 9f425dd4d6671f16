//! Lottery Program
//!
//! A Solana program that keeps an append-only ledger of lotteries and tickets:
//! - A master registry mints sequential lottery ids
//! - Each lottery fixes its ticket price and collects payments in its own account
//! - Each purchase creates a ticket record with the next id of its lottery
//!
//! Every record lives at a PDA derived from its tag and ids (see [`pda`]), so
//! clients can address any record without a lookup. Counters are checked against
//! the id the client derived its address from; a stale client gets
//! `LotteryError::Conflict` and retries.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod pda;
pub mod states;

pub use constants::*;
pub use contexts::*;

declare_id!("3BG3Ymop2mWUyd3twAnb42y57WvbFQ6xGuua7TVvDU6K");

#[program]
pub mod lottery {
    use super::*;

    // ========================================
    // Admin Instructions
    // ========================================

    /// Create the master registry with `last_id = 0`
    pub fn init_master(ctx: Context<InitMaster>) -> Result<()> {
        instructions::init_master(ctx)
    }

    /// Open lottery `lottery_id` (the registry's next id) at `ticket_price` lamports
    pub fn create_lottery(
        ctx: Context<CreateLottery>,
        ticket_price: u64,
        lottery_id: u32,
    ) -> Result<()> {
        instructions::create_lottery(ctx, ticket_price, lottery_id)
    }

    /// Reserved for winner selection; always fails with `DrawNotSupported`
    pub fn draw_lottery(ctx: Context<DrawLottery>, lottery_id: u32) -> Result<()> {
        instructions::draw_lottery(ctx, lottery_id)
    }

    // ========================================
    // User Instructions
    // ========================================

    /// Buy ticket `ticket_id` (the lottery's next id)
    pub fn buy_ticket(ctx: Context<BuyTicket>, lottery_id: u32, ticket_id: u32) -> Result<()> {
        instructions::buy_ticket(ctx, lottery_id, ticket_id)
    }
}

use anchor_lang::prelude::*;

use crate::{constants::*, errors::LotteryError, states::*};

/// ========================================
/// Account Structs
/// ========================================

/// Accounts required for initializing the master registry
#[derive(Accounts)]
pub struct InitMaster<'info> {
    /// CHECK: Master registry PDA; must not exist yet, created in the handler
    #[account(
        mut,
        seeds = [MASTER_SEED],
        bump
    )]
    pub master: UncheckedAccount<'info>,
    /// Account paying for the registry allocation
    #[account(mut)]
    pub payer: Signer<'info>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for opening a new lottery
///
/// The lottery slot is taken with `init_if_needed` so a stale `lottery_id`
/// reaches the handler and fails with `Conflict` instead of a system error.
#[derive(Accounts)]
#[instruction(ticket_price: u64, lottery_id: u32)]
pub struct CreateLottery<'info> {
    /// The lottery state account for `lottery_id` (PDA)
    #[account(
        init_if_needed,
        payer = authority,
        space = DISCRIMINATOR_LEN + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,
    /// The master registry minting lottery ids (PDA)
    #[account(
        mut,
        seeds = [MASTER_SEED],
        bump
    )]
    pub master: Account<'info, Master>,
    /// Creator of the lottery, pays for its allocation
    #[account(mut)]
    pub authority: Signer<'info>,
    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/// Accounts required for buying a ticket
#[derive(Accounts)]
#[instruction(lottery_id: u32, ticket_id: u32)]
pub struct BuyTicket<'info> {
    /// The lottery being played; receives the ticket price
    #[account(
        mut,
        seeds = [LOTTERY_SEED, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,
    /// The ticket state account for `ticket_id` within this lottery (PDA)
    #[account(
        init_if_needed,
        payer = buyer,
        space = DISCRIMINATOR_LEN + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, lottery.key().as_ref(), ticket_id.to_le_bytes().as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,
    /// The buyer, pays the ticket price and the ticket allocation
    #[account(mut)]
    pub buyer: Signer<'info>,
    /// System program for account creation and the payment transfer
    pub system_program: Program<'info, System>,
}

/// Accounts required for drawing a lottery
#[derive(Accounts)]
#[instruction(lottery_id: u32)]
pub struct DrawLottery<'info> {
    /// The lottery to draw
    #[account(
        has_one = authority @ LotteryError::Unauthorized,
        seeds = [LOTTERY_SEED, lottery_id.to_le_bytes().as_ref()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,
    /// Lottery authority
    pub authority: Signer<'info>,
}

use anchor_lang::prelude::*;

use crate::{contexts::*, errors::LotteryError, events::*, helpers::*};

/// ========================================
/// User Instructions
/// ========================================

/// Buy the next ticket of a lottery
///
/// The buyer pays the ticket price into the lottery account and receives a
/// ticket record at the PDA derived from the lottery address and the ticket id.
///
/// Process:
/// 1. Check the lottery matches `lottery_id`
/// 2. Issue the next ticket (`Conflict` if `ticket_id` is stale)
/// 3. Fill the ticket record
/// 4. Transfer the ticket price into escrow
///
/// Args:
/// - ctx: Context containing the lottery, ticket PDA and buyer
/// - lottery_id: Id of the lottery
/// - ticket_id: Id the ticket address was derived from, must be `tickets_sold + 1`
///
/// Returns: Result indicating success or failure
pub fn buy_ticket(ctx: Context<BuyTicket>, lottery_id: u32, ticket_id: u32) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();

    // ============ LOTTERY VALIDATION ============
    let lottery = &mut ctx.accounts.lottery;
    require_eq!(lottery.id, lottery_id, LotteryError::LotteryIdMismatch);

    // ============ TICKET ISSUANCE ============
    // Stale ids point at existing tickets, so the counter check comes first
    let ticket = lottery.issue_ticket(ticket_id, buyer)?;
    let price = lottery.ticket_price;
    let escrowed = lottery.escrowed();

    require_eq!(ctx.accounts.ticket.id, 0, LotteryError::AlreadyInitialized);
    ctx.accounts.ticket.set_inner(ticket);

    // ============ PAYMENT ============
    deposit_to_escrow(
        &ctx.accounts.buyer.to_account_info(),
        &ctx.accounts.lottery.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        price,
    )?;

    let ticket = &ctx.accounts.ticket;
    msg!("Lottery {}: ticket {} sold to {}", lottery_id, ticket.id, ticket.owner);
    if let Some(escrowed) = escrowed {
        msg!("Escrowed: {}", escrowed);
    }

    emit!(TicketPurchased {
        lottery: ctx.accounts.lottery.key(),
        lottery_id,
        ticket: ticket.key(),
        ticket_id: ticket.id,
        buyer,
        price,
    });

    Ok(())
}

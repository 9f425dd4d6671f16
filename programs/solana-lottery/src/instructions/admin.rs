use anchor_lang::prelude::*;

use crate::{constants::*, contexts::*, errors::LotteryError, events::*, helpers::*, states::Master};

/// ========================================
/// Admin Instructions
/// ========================================

/// Initialize the master registry
///
/// Creates the singleton record that mints lottery ids, starting at `last_id = 0`.
/// Fails with `AlreadyInitialized` if the registry exists.
///
/// Args:
/// - ctx: Context containing the master PDA and the payer
///
/// Returns: Result indicating success or failure
pub fn init_master(ctx: Context<InitMaster>) -> Result<()> {
    let master = Master { last_id: 0 };
    let signer_seeds: &[&[&[u8]]] = &[&[MASTER_SEED, &[ctx.bumps.master]]];

    create_record(
        &master,
        &ctx.accounts.master.to_account_info(),
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        signer_seeds,
    )?;

    msg!("Master initialized: {}", ctx.accounts.master.key());

    emit!(MasterInitialized {
        master: ctx.accounts.master.key(),
        payer: ctx.accounts.payer.key(),
    });
    Ok(())
}

/// Open a new lottery
///
/// Allocates the next id from the master registry, fills the lottery record
/// at the PDA derived from that id and advances the registry counter. Both
/// writes land in the same transaction.
///
/// Args:
/// - ctx: Context containing the lottery PDA, master registry and authority
/// - ticket_price: Price of one ticket in lamports, must be non-zero
/// - lottery_id: Id the lottery address was derived from, must be `last_id + 1`
///
/// Returns: Result indicating success or failure
///
/// Constraints:
/// - Master registry must exist
/// - `lottery_id` must match the registry counter, otherwise `Conflict`
pub fn create_lottery(
    ctx: Context<CreateLottery>,
    ticket_price: u64,
    lottery_id: u32,
) -> Result<()> {
    // ============ ID ALLOCATION ============
    let lottery = ctx.accounts.master.open_lottery(
        lottery_id,
        ticket_price,
        ctx.accounts.authority.key(),
    )?;

    // ============ RECORD CREATION ============
    // A fresh slot is zeroed; ids start at 1
    require_eq!(ctx.accounts.lottery.id, 0, LotteryError::AlreadyInitialized);
    ctx.accounts.lottery.set_inner(lottery);

    let lottery = &ctx.accounts.lottery;
    msg!("Created Lottery: {}", lottery.id);
    msg!("Authority: {}", lottery.authority);
    msg!("Ticket Price: {}", lottery.ticket_price);

    emit!(LotteryCreated {
        lottery: lottery.key(),
        lottery_id: lottery.id,
        authority: lottery.authority,
        ticket_price: lottery.ticket_price,
    });
    Ok(())
}

/// Draw a lottery
///
/// Reserved for winner selection and payout. The context checks that the
/// lottery exists and that the caller is its authority; the handler then
/// fails with `DrawNotSupported`.
pub fn draw_lottery(ctx: Context<DrawLottery>, lottery_id: u32) -> Result<()> {
    let lottery = &ctx.accounts.lottery;
    require_eq!(lottery.id, lottery_id, LotteryError::LotteryIdMismatch);

    msg!(
        "Lottery {} has {} tickets; no draw algorithm is defined",
        lottery.id,
        lottery.tickets_sold
    );
    err!(LotteryError::DrawNotSupported)
}

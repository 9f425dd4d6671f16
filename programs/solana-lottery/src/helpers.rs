use crate::{constants::DISCRIMINATOR_LEN, errors::LotteryError};

use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, CreateAccount, Transfer},
    Space,
};

/// ========================================
/// Record Storage Helpers
/// ========================================

/// Rejects a target address that already holds program state
///
/// An address is vacant when it carries no data and is not owned by the program.
/// A vacant address may still hold lamports sent to it ahead of time.
pub fn ensure_vacant(target: &AccountInfo, program_id: &Pubkey) -> Result<()> {
    require!(
        target.data_is_empty() && target.owner != program_id,
        LotteryError::AlreadyInitialized
    );
    Ok(())
}

/// Creates a program-owned record at a PDA and writes its initial value
///
/// The payer funds rent exemption. Fails with `AlreadyInitialized` when the
/// address is occupied.
///
/// Args:
/// - record: Initial value to store
/// - target: The PDA to create
/// - payer: Signer paying for the allocation
/// - system_program: System program account
/// - signer_seeds: Seeds and bump of `target`
pub fn create_record<'info, T>(
    record: &T,
    target: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()>
where
    T: AccountSerialize + Space,
{
    ensure_vacant(target, &crate::ID)?;

    let space = DISCRIMINATOR_LEN + T::INIT_SPACE;
    let rent = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        )?;
    } else {
        // Pre-funded address: create_account would fail, so top up and claim it
        let top_up = rent.saturating_sub(current_lamports);
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: target.clone(),
                    },
                ),
                top_up,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: target.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: target.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    write_record(target, record)
}

/// Serializes a record, discriminator included, into the account data
pub fn write_record<T: AccountSerialize>(target: &AccountInfo, record: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

/// ========================================
/// Escrow Helpers
/// ========================================

/// Moves the ticket price from the buyer into the lottery escrow
///
/// Checks the buyer balance before invoking the system program so a short
/// balance surfaces as `InsufficientFunds`.
pub fn deposit_to_escrow<'info>(
    buyer: &AccountInfo<'info>,
    escrow: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(
        buyer.lamports() >= amount,
        LotteryError::InsufficientFunds
    );

    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: buyer.clone(),
                to: escrow.clone(),
            },
        ),
        amount,
    )
}

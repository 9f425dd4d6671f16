/// States module for the lottery program
///
/// Contains all account structures and their implementations used to store
/// program state on-chain. Records never embed each other; relationships are
/// expressed as ids and derived addresses.
use anchor_lang::prelude::*;

use crate::errors::LotteryError;

/// Singleton registry that mints lottery ids
///
/// Lives at the PDA derived from `MASTER_SEED` alone.
#[account]
#[derive(InitSpace, Debug)]
pub struct Master {
    /// Highest lottery id allocated so far (0 before the first lottery)
    pub last_id: u32,
}

impl Master {
    /// Id the next lottery will receive
    pub fn next_lottery_id(&self) -> Result<u32> {
        self.last_id
            .checked_add(1)
            .ok_or_else(|| error!(LotteryError::CounterOverflow))
    }

    /// Builds the next lottery and advances `last_id`.
    ///
    /// `expected_id` is the id the caller derived the lottery address from. If the
    /// counter has moved since the caller read it the allocation fails with
    /// `Conflict`. Nothing is mutated on failure.
    pub fn open_lottery(
        &mut self,
        expected_id: u32,
        ticket_price: u64,
        authority: Pubkey,
    ) -> Result<Lottery> {
        let id = self.next_lottery_id()?;
        let lottery = Lottery::new(id, ticket_price, authority)?;
        require_eq!(expected_id, id, LotteryError::Conflict);

        self.last_id = id;
        Ok(lottery)
    }
}

/// One lottery and its sales counter
///
/// Tickets are paid into this account, which acts as the escrow.
#[account]
#[derive(InitSpace, Debug)]
pub struct Lottery {
    /// Sequential id assigned from the master registry
    pub id: u32,
    /// Price of one ticket in lamports
    pub ticket_price: u64,
    /// Creator of the lottery
    pub authority: Pubkey,
    /// Number of tickets sold; also the id of the last ticket issued
    pub tickets_sold: u32,
}

impl Lottery {
    /// Builds an unsold lottery; fails with `InvalidTicketPrice` for a zero price
    pub fn new(id: u32, ticket_price: u64, authority: Pubkey) -> Result<Self> {
        require_gt!(ticket_price, 0, LotteryError::InvalidTicketPrice);

        Ok(Self {
            id,
            ticket_price,
            authority,
            tickets_sold: 0,
        })
    }

    /// Id the next ticket will receive
    pub fn next_ticket_id(&self) -> Result<u32> {
        self.tickets_sold
            .checked_add(1)
            .ok_or_else(|| error!(LotteryError::CounterOverflow))
    }

    /// Issues the next ticket to `owner` and bumps `tickets_sold`.
    ///
    /// Fails with `Conflict` when `expected_id` is not the next ticket id.
    pub fn issue_ticket(&mut self, expected_id: u32, owner: Pubkey) -> Result<Ticket> {
        let id = self.next_ticket_id()?;
        require_eq!(expected_id, id, LotteryError::Conflict);

        self.tickets_sold = id;
        Ok(Ticket {
            id,
            lottery_id: self.id,
            owner,
        })
    }

    /// Lamports collected from ticket sales
    pub fn escrowed(&self) -> Option<u64> {
        self.ticket_price.checked_mul(self.tickets_sold as u64)
    }
}

/// A single purchased ticket
#[account]
#[derive(InitSpace, Debug)]
pub struct Ticket {
    /// Sequential id within the owning lottery, starting at 1
    pub id: u32,
    /// Id of the lottery this ticket belongs to
    pub lottery_id: u32,
    /// Buyer of the ticket
    pub owner: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::code_of;
    use anchor_lang::{error::ErrorCode, system_program, Space};

    const PRICE: u64 = 1_000_000;

    #[test]
    fn test_space_constants() {
        assert_eq!(Master::INIT_SPACE, 4);
        assert_eq!(Lottery::INIT_SPACE, 4 + 8 + 32 + 4);
        assert_eq!(Ticket::INIT_SPACE, 4 + 4 + 32);
    }

    #[test]
    fn test_lottery_ids_are_sequential() {
        let mut master = Master { last_id: 0 };
        let authority = Pubkey::new_unique();

        let ids: Vec<u32> = (1..=5)
            .map(|expected| {
                master
                    .open_lottery(expected, PRICE, authority)
                    .unwrap()
                    .id
            })
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(master.last_id, 5);
    }

    #[test]
    fn test_zero_price_rejected_without_advancing() {
        let mut master = Master { last_id: 3 };

        let err = master
            .open_lottery(4, 0, Pubkey::new_unique())
            .unwrap_err();

        assert_eq!(code_of(err), u32::from(LotteryError::InvalidTicketPrice));
        assert_eq!(master.last_id, 3);
    }

    #[test]
    fn test_stale_lottery_id_conflicts() {
        let mut master = Master { last_id: 1 };

        // Another creator already took id 2
        let err = master
            .open_lottery(1, PRICE, Pubkey::new_unique())
            .unwrap_err();
        assert_eq!(code_of(err), u32::from(LotteryError::Conflict));
        assert_eq!(master.last_id, 1);

        let lottery = master.open_lottery(2, PRICE, Pubkey::new_unique()).unwrap();
        assert_eq!(lottery.id, 2);
    }

    #[test]
    fn test_master_counter_overflow() {
        let mut master = Master { last_id: u32::MAX };

        let err = master
            .open_lottery(0, PRICE, Pubkey::new_unique())
            .unwrap_err();

        assert_eq!(code_of(err), u32::from(LotteryError::CounterOverflow));
        assert_eq!(master.last_id, u32::MAX);
    }

    #[test]
    fn test_tickets_issued_in_order() {
        let authority = Pubkey::new_unique();
        let mut lottery = Lottery::new(7, PRICE, authority).unwrap();
        let buyers: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

        for (i, buyer) in buyers.iter().enumerate() {
            let ticket = lottery.issue_ticket(i as u32 + 1, *buyer).unwrap();
            assert_eq!(ticket.id, i as u32 + 1);
            assert_eq!(ticket.lottery_id, 7);
            assert_eq!(ticket.owner, *buyer);
        }

        assert_eq!(lottery.tickets_sold, 4);
        assert_eq!(lottery.escrowed(), Some(4 * PRICE));
        assert_eq!(lottery.authority, authority);
    }

    #[test]
    fn test_racing_purchases_never_share_an_id() {
        let mut lottery = Lottery::new(1, PRICE, Pubkey::new_unique()).unwrap();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        // Both buyers read tickets_sold == 0 and target ticket 1
        let first = lottery.issue_ticket(1, alice).unwrap();
        let err = lottery.issue_ticket(1, bob).unwrap_err();
        assert_eq!(code_of(err), u32::from(LotteryError::Conflict));
        assert_eq!(lottery.tickets_sold, 1);

        // Bob re-reads the counter and retries
        let retried = lottery.issue_ticket(lottery.next_ticket_id().unwrap(), bob).unwrap();
        assert_ne!(first.id, retried.id);
        assert_eq!(retried.id, 2);
        assert_eq!(retried.owner, bob);
    }

    #[test]
    fn test_single_purchase_scenario() {
        let mut master = Master { last_id: 0 };
        let authority = Pubkey::new_unique();
        let buyer = Pubkey::new_unique();

        let mut lottery = master.open_lottery(1, PRICE, authority).unwrap();
        assert_eq!(lottery.id, 1);
        assert_eq!(lottery.ticket_price, PRICE);

        let ticket = lottery.issue_ticket(1, buyer).unwrap();
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.lottery_id, 1);
        assert_eq!(ticket.owner, buyer);
        assert_eq!(lottery.tickets_sold, 1);
    }

    #[test]
    fn test_missing_records_are_not_initialized() {
        let key: &'static Pubkey = Box::leak(Box::new(Pubkey::new_unique()));
        let owner: &'static Pubkey = Box::leak(Box::new(system_program::ID));

        let empty = || -> &'static AccountInfo<'static> {
            let lamports: &'static mut u64 = Box::leak(Box::new(0));
            let data: &'static mut [u8] = Box::leak(Vec::new().into_boxed_slice());
            Box::leak(Box::new(AccountInfo::new(
                key, false, true, lamports, data, owner, false, 0,
            )))
        };

        let err = Account::<Master>::try_from(empty())
            .err()
            .expect("missing master must not load");
        assert_eq!(code_of(err), u32::from(ErrorCode::AccountNotInitialized));

        let err = Account::<Lottery>::try_from(empty())
            .err()
            .expect("missing lottery must not load");
        assert_eq!(code_of(err), u32::from(ErrorCode::AccountNotInitialized));
    }

    #[test]
    fn test_lottery_layout() {
        let authority = Pubkey::new_unique();
        let mut lottery = Lottery::new(1, PRICE, authority).unwrap();
        lottery.tickets_sold = 3;

        let mut data = Vec::new();
        lottery.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), 8 + Lottery::INIT_SPACE);
        assert_eq!(&data[..8], Lottery::DISCRIMINATOR);
        assert_eq!(&data[8..12], &1u32.to_le_bytes());
        assert_eq!(&data[12..20], &PRICE.to_le_bytes());
        assert_eq!(&data[20..52], authority.as_ref());
        assert_eq!(&data[52..56], &3u32.to_le_bytes());
    }

    #[test]
    fn test_ticket_layout() {
        let owner = Pubkey::new_unique();
        let ticket = Ticket {
            id: 2,
            lottery_id: 9,
            owner,
        };

        let mut data = Vec::new();
        ticket.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), 8 + Ticket::INIT_SPACE);
        assert_eq!(&data[8..12], &2u32.to_le_bytes());
        assert_eq!(&data[12..16], &9u32.to_le_bytes());
        assert_eq!(&data[16..48], owner.as_ref());
    }
}

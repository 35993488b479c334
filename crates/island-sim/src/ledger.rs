//! Resource ledger: a single balance debited by construction and credited
//! by kills.

use island_core::error::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLedger {
    balance: u32,
}

impl ResourceLedger {
    pub fn new(balance: u32) -> Self {
        Self { balance }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.balance >= cost
    }

    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Debit `cost`, or reject without touching the balance.
    pub fn try_debit(&mut self, cost: u32) -> Result<(), Rejection> {
        if !self.can_afford(cost) {
            return Err(Rejection::InsufficientResources {
                cost,
                balance: self.balance,
            });
        }
        self.balance -= cost;
        Ok(())
    }
}

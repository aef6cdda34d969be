use cosmwasm_std::Uint128;

use crate::{error::ContractResult, types::Allocation};

impl Allocation {
    /// Amount unlocked by the schedule at the given timestamp, regardless of
    /// how much has already been claimed.
    ///
    /// Before the cliff ends nothing is unlocked, not even the initial
    /// tranche. Between the cliff and the end of the schedule, the initial
    /// tranche is unlocked in full and the rest unlocks linearly against time
    /// elapsed since `start_time` (not since the cliff), with floor division.
    pub fn vested_amount(&self, timestamp: u64) -> ContractResult<Uint128> {
        if timestamp < self.start_time + self.cliff {
            Ok(Uint128::zero())
        } else if timestamp >= self.start_time + self.duration {
            Ok(self.total)
        } else {
            let linear = self.total.checked_sub(self.initial)?;
            let accrued =
                linear.checked_multiply_ratio(timestamp - self.start_time, self.duration)?;
            Ok(self.initial.checked_add(accrued)?)
        }
    }

    /// Vested amount minus what has already been claimed
    pub fn releasable_amount(&self, timestamp: u64) -> ContractResult<Uint128> {
        Ok(self.vested_amount(timestamp)?.checked_sub(self.claimed)?)
    }
}

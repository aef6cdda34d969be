use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct Config {
    /// The cw20 token this vault holds in custody
    pub token: Addr,
}

/// A single vesting grant. Once issued, only `claimed` ever changes; the
/// schedule itself is immutable until the allocation is revoked.
#[cw_serde]
pub struct Allocation {
    /// UNIX timestamp (seconds) at which the schedule begins; may be in the
    /// past or future relative to issuance
    pub start_time: u64,
    /// Seconds after `start_time` before anything unlocks
    pub cliff: u64,
    /// Seconds after `start_time` until the grant is fully unlocked
    pub duration: u64,
    /// Total amount granted
    pub total: Uint128,
    /// Cumulative amount already released to the beneficiary
    pub claimed: Uint128,
    /// Tranche unlocked in full once the cliff has passed, fixed at issuance
    /// as a percentage of `total`
    pub initial: Uint128,
}

#[cw_serde]
pub struct ConfigResponse {
    pub token: String,
}

#[cw_serde]
pub struct AllocationResponse {
    pub beneficiary: String,
    pub id: u64,
    pub allocation: Allocation,
}

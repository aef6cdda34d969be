use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use mars_owner::OwnerUpdate;

use crate::types::{AllocationResponse, ConfigResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Contract's owner, the only address allowed to issue and revoke
    /// allocations
    pub owner: String,
    /// The cw20 token to hold in custody
    pub token: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Manages contract ownership
    UpdateOwner(OwnerUpdate),

    /// Pull `amount` tokens from the owner and record a vesting allocation
    /// for the beneficiary. The owner must have granted the vault a cw20
    /// allowance covering `amount` beforehand.
    Issue {
        beneficiary: String,
        amount: Uint128,
        /// UNIX timestamp (seconds) at which the schedule begins; not
        /// validated against the current block time
        start_time: u64,
        /// Seconds after `start_time` before anything unlocks
        cliff: u64,
        /// Seconds after `start_time` until the grant is fully unlocked;
        /// must be no less than `cliff`
        duration: u64,
        /// Percentage of `amount`, in [0, 100], unlocked in full once the
        /// cliff passes
        initial_pct: u64,
    },

    /// Pay the currently releasable amount of one allocation to its
    /// beneficiary. Callable by anyone; the funds always go to the
    /// beneficiary.
    Release {
        beneficiary: String,
        id: u64,
    },

    /// Release every allocation of the beneficiary that currently has a
    /// non-zero releasable amount. Allocations with nothing to release are
    /// skipped rather than failing the call.
    ReleaseAll {
        beneficiary: String,
    },

    /// Remove an allocation and return its entire unclaimed remainder,
    /// including any vested-but-unclaimed portion, to the owner
    Revoke {
        beneficiary: String,
        id: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(mars_owner::OwnerResponse)]
    Owner {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(AllocationResponse)]
    Allocation {
        beneficiary: String,
        id: u64,
    },

    #[returns(Vec<AllocationResponse>)]
    Allocations {
        beneficiary: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(Vec<AllocationResponse>)]
    AllAllocations {
        start_after: Option<(String, u64)>,
        limit: Option<u32>,
    },

    /// Amount the allocation would pay out if released at the current block
    /// time
    #[returns(Uint128)]
    Releasable {
        beneficiary: String,
        id: u64,
    },
}

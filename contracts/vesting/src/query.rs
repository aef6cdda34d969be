use cosmwasm_std::{Addr, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::{
    error::{ContractError, ContractResult},
    state::{ALLOCATIONS, CONFIG},
    types::{AllocationResponse, ConfigResponse},
};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    Ok(ConfigResponse {
        token: CONFIG.load(deps.storage)?.token.to_string(),
    })
}

pub fn query_allocation(
    deps: Deps,
    beneficiary: String,
    id: u64,
) -> ContractResult<AllocationResponse> {
    let addr = deps.api.addr_validate(&beneficiary)?;
    let allocation = ALLOCATIONS.may_load(deps.storage, (&addr, id))?.ok_or(
        ContractError::AllocationNotFound {
            beneficiary,
            id,
        },
    )?;
    Ok(AllocationResponse {
        beneficiary: addr.to_string(),
        id,
        allocation,
    })
}

pub fn query_allocations(
    deps: Deps,
    beneficiary: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<AllocationResponse>> {
    let addr = deps.api.addr_validate(&beneficiary)?;
    let start = start_after.map(Bound::exclusive);
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    ALLOCATIONS
        .prefix(&addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| {
            let (id, allocation) = res?;
            Ok(AllocationResponse {
                beneficiary: addr.to_string(),
                id,
                allocation,
            })
        })
        .collect()
}

pub fn query_all_allocations(
    deps: Deps,
    start_after: Option<(String, u64)>,
    limit: Option<u32>,
) -> StdResult<Vec<AllocationResponse>> {
    let start_addr: Addr;
    let start = match &start_after {
        Some((unchecked, id)) => {
            start_addr = deps.api.addr_validate(unchecked)?;
            Some(Bound::exclusive((&start_addr, *id)))
        }
        None => None,
    };

    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;

    ALLOCATIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| {
            let ((addr, id), allocation) = res?;
            Ok(AllocationResponse {
                beneficiary: addr.to_string(),
                id,
                allocation,
            })
        })
        .collect()
}

pub fn query_releasable(
    deps: Deps,
    env: &Env,
    beneficiary: String,
    id: u64,
) -> ContractResult<Uint128> {
    let addr = deps.api.addr_validate(&beneficiary)?;
    let allocation = ALLOCATIONS.may_load(deps.storage, (&addr, id))?.ok_or(
        ContractError::AllocationNotFound {
            beneficiary,
            id,
        },
    )?;
    allocation.releasable_amount(env.block.time.seconds())
}

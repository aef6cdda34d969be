#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::set_contract_version;
use mars_owner::OwnerInit::SetInitialOwner;

use crate::{
    error::ContractResult,
    execute::{issue, release, release_all, revoke},
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    query::{
        query_all_allocations, query_allocation, query_allocations, query_config, query_releasable,
    },
    state::{CONFIG, NEXT_ID, OWNER},
    types::Config,
};

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, format!("crates.io:{CONTRACT_NAME}"), CONTRACT_VERSION)?;

    OWNER.initialize(
        deps.storage,
        deps.api,
        SetInitialOwner {
            owner: msg.owner,
        },
    )?;

    let config = Config {
        token: deps.api.addr_validate(&msg.token)?,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_ID.save(deps.storage, &0)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::UpdateOwner(update) => Ok(OWNER.update(deps, info, update)?),
        ExecuteMsg::Issue {
            beneficiary,
            amount,
            start_time,
            cliff,
            duration,
            initial_pct,
        } => issue(deps, env, info, beneficiary, amount, start_time, cliff, duration, initial_pct),
        ExecuteMsg::Release {
            beneficiary,
            id,
        } => release(deps, env, beneficiary, id),
        ExecuteMsg::ReleaseAll {
            beneficiary,
        } => release_all(deps, env, beneficiary),
        ExecuteMsg::Revoke {
            beneficiary,
            id,
        } => revoke(deps, info, beneficiary, id),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res = match msg {
        QueryMsg::Owner {} => to_binary(&OWNER.query(deps.storage)?),
        QueryMsg::Config {} => to_binary(&query_config(deps)?),
        QueryMsg::Allocation {
            beneficiary,
            id,
        } => to_binary(&query_allocation(deps, beneficiary, id)?),
        QueryMsg::Allocations {
            beneficiary,
            start_after,
            limit,
        } => to_binary(&query_allocations(deps, beneficiary, start_after, limit)?),
        QueryMsg::AllAllocations {
            start_after,
            limit,
        } => to_binary(&query_all_allocations(deps, start_after, limit)?),
        QueryMsg::Releasable {
            beneficiary,
            id,
        } => to_binary(&query_releasable(deps, &env, beneficiary, id)?),
    };
    res.map_err(Into::into)
}

use cosmwasm_std::{
    to_binary, Addr, CosmosMsg, DepsMut, Env, MessageInfo, Order, Response, StdResult, Uint128,
    WasmMsg,
};
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::{
    error::{ContractError, ContractResult, ValidationError},
    state::{ALLOCATIONS, CONFIG, NEXT_ID, OWNER},
    types::Allocation,
};

pub fn issue(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: String,
    amount: Uint128,
    start_time: u64,
    cliff: u64,
    duration: u64,
    initial_pct: u64,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    if amount.is_zero() {
        return Err(ValidationError::InvalidParam {
            param_name: "amount".to_string(),
            invalid_value: "0".to_string(),
            predicate: "> 0".to_string(),
        }
        .into());
    }
    if cliff > duration {
        return Err(ValidationError::InvalidParam {
            param_name: "cliff".to_string(),
            invalid_value: cliff.to_string(),
            predicate: format!("<= duration ({duration})"),
        }
        .into());
    }
    if initial_pct > 100 {
        return Err(ValidationError::InvalidParam {
            param_name: "initial_pct".to_string(),
            invalid_value: initial_pct.to_string(),
            predicate: "<= 100".to_string(),
        }
        .into());
    }
    if start_time.checked_add(duration).is_none() {
        return Err(ValidationError::InvalidParam {
            param_name: "start_time".to_string(),
            invalid_value: start_time.to_string(),
            predicate: format!("representable when added to duration ({duration})"),
        }
        .into());
    }

    // advisory pre-authorization check; the TransferFrom message below is the
    // authoritative gate and reverts the whole transaction if it fails
    let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
        config.token.clone(),
        &Cw20QueryMsg::Allowance {
            owner: info.sender.to_string(),
            spender: env.contract.address.to_string(),
        },
    )?;
    if allowance.allowance < amount {
        return Err(ValidationError::InvalidParam {
            param_name: "amount".to_string(),
            invalid_value: amount.to_string(),
            predicate: format!("<= the vault's cw20 allowance ({})", allowance.allowance),
        }
        .into());
    }

    let initial = amount.checked_multiply_ratio(initial_pct, 100u64)?;

    let id = NEXT_ID.load(deps.storage)?;
    NEXT_ID.save(deps.storage, &(id + 1))?;

    let allocation = Allocation {
        start_time,
        cliff,
        duration,
        total: amount,
        claimed: Uint128::zero(),
        initial,
    };
    ALLOCATIONS.save(deps.storage, (&beneficiary, id), &allocation)?;

    let transfer_from_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_from_msg)
        .add_attribute("action", "issue")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("id", id.to_string())
        .add_attribute("amount", amount)
        .add_attribute("start_time", start_time.to_string())
        .add_attribute("cliff", cliff.to_string())
        .add_attribute("duration", duration.to_string()))
}

pub fn release(
    deps: DepsMut,
    env: Env,
    beneficiary: String,
    id: u64,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    let mut allocation = ALLOCATIONS.may_load(deps.storage, (&beneficiary, id))?.ok_or_else(
        || ContractError::AllocationNotFound {
            beneficiary: beneficiary.to_string(),
            id,
        },
    )?;

    let amount = allocation.releasable_amount(env.block.time.seconds())?;
    if amount.is_zero() {
        return Err(ContractError::NothingToRelease {});
    }

    // bookkeeping strictly before the transfer message
    allocation.claimed = allocation.claimed.checked_add(amount)?;
    ALLOCATIONS.save(deps.storage, (&beneficiary, id), &allocation)?;

    let transfer_msg = build_transfer_msg(&config.token, &beneficiary, amount)?;

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "release")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("id", id.to_string())
        .add_attribute("amount", amount)
        .add_attribute("remaining", allocation.total.checked_sub(allocation.claimed)?))
}

pub fn release_all(deps: DepsMut, env: Env, beneficiary: String) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    // snapshot the beneficiary's allocations before mutating any of them
    let allocations = ALLOCATIONS
        .prefix(&beneficiary)
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;

    let timestamp = env.block.time.seconds();
    let mut msgs = vec![];
    let mut released = Uint128::zero();

    for (id, mut allocation) in allocations {
        let amount = allocation.releasable_amount(timestamp)?;
        if amount.is_zero() {
            // not an error here, unlike a direct Release of this allocation
            continue;
        }

        allocation.claimed = allocation.claimed.checked_add(amount)?;
        ALLOCATIONS.save(deps.storage, (&beneficiary, id), &allocation)?;

        msgs.push(build_transfer_msg(&config.token, &beneficiary, amount)?);
        released = released.checked_add(amount)?;
    }

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "release_all")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("amount", released))
}

pub fn revoke(
    deps: DepsMut,
    info: MessageInfo,
    beneficiary: String,
    id: u64,
) -> ContractResult<Response> {
    OWNER.assert_owner(deps.storage, &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    let allocation = ALLOCATIONS.may_load(deps.storage, (&beneficiary, id))?.ok_or_else(|| {
        ContractError::AllocationNotFound {
            beneficiary: beneficiary.to_string(),
            id,
        }
    })?;

    // the entire unclaimed remainder goes back to the owner, including any
    // portion that had vested but was never released
    let remainder = allocation.total.checked_sub(allocation.claimed)?;

    ALLOCATIONS.remove(deps.storage, (&beneficiary, id));

    let mut response = Response::new();
    if !remainder.is_zero() {
        response = response.add_message(build_transfer_msg(&config.token, &info.sender, remainder)?);
    }

    Ok(response
        .add_attribute("action", "revoke")
        .add_attribute("beneficiary", beneficiary)
        .add_attribute("id", id.to_string())
        .add_attribute("total", allocation.total)
        .add_attribute("remainder", remainder))
}

fn build_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.into(),
            amount,
        })?,
        funds: vec![],
    }))
}

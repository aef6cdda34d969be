use std::mem::take;

use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, BasicApp, ContractWrapper, Executor};
use mars_owner::OwnerResponse;
use vesting_vault::{
    contract,
    msg::{ExecuteMsg, InstantiateMsg, QueryMsg},
    types::{AllocationResponse, ConfigResponse},
};

pub struct MockEnv {
    pub app: BasicApp,
    pub owner: Addr,
    pub vault: Addr,
    pub token: Addr,
}

pub struct MockEnvBuilder {
    pub app: BasicApp,
    pub owner_balance: Uint128,
}

#[allow(clippy::new_ret_no_self)]
impl MockEnv {
    pub fn new() -> MockEnvBuilder {
        MockEnvBuilder {
            app: App::default(),
            owner_balance: Uint128::new(1_000_000),
        }
    }

    //--------------------------------------------------------------------------------------------------
    // Execute Msgs
    //--------------------------------------------------------------------------------------------------

    pub fn increase_allowance(&mut self, sender: &Addr, amount: u128) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.token.clone(),
            &Cw20ExecuteMsg::IncreaseAllowance {
                spender: self.vault.to_string(),
                amount: Uint128::new(amount),
                expires: None,
            },
            &[],
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn issue(
        &mut self,
        sender: &Addr,
        beneficiary: &str,
        amount: u128,
        start_time: u64,
        cliff: u64,
        duration: u64,
        initial_pct: u64,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault.clone(),
            &ExecuteMsg::Issue {
                beneficiary: beneficiary.to_string(),
                amount: Uint128::new(amount),
                start_time,
                cliff,
                duration,
                initial_pct,
            },
            &[],
        )
    }

    pub fn release(&mut self, sender: &Addr, beneficiary: &str, id: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault.clone(),
            &ExecuteMsg::Release {
                beneficiary: beneficiary.to_string(),
                id,
            },
            &[],
        )
    }

    pub fn release_all(&mut self, sender: &Addr, beneficiary: &str) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault.clone(),
            &ExecuteMsg::ReleaseAll {
                beneficiary: beneficiary.to_string(),
            },
            &[],
        )
    }

    pub fn revoke(&mut self, sender: &Addr, beneficiary: &str, id: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            sender.clone(),
            self.vault.clone(),
            &ExecuteMsg::Revoke {
                beneficiary: beneficiary.to_string(),
                id,
            },
            &[],
        )
    }

    //--------------------------------------------------------------------------------------------------
    // Queries
    //--------------------------------------------------------------------------------------------------

    pub fn query_owner(&self) -> Addr {
        let res = self.query_ownership();
        Addr::unchecked(res.owner.unwrap())
    }

    pub fn query_ownership(&self) -> OwnerResponse {
        self.app.wrap().query_wasm_smart(self.vault.clone(), &QueryMsg::Owner {}).unwrap()
    }

    pub fn query_config(&self) -> ConfigResponse {
        self.app.wrap().query_wasm_smart(self.vault.clone(), &QueryMsg::Config {}).unwrap()
    }

    pub fn query_allocation(&self, beneficiary: &str, id: u64) -> AllocationResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault.clone(),
                &QueryMsg::Allocation {
                    beneficiary: beneficiary.to_string(),
                    id,
                },
            )
            .unwrap()
    }

    pub fn query_allocations(&self, beneficiary: &str) -> Vec<AllocationResponse> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault.clone(),
                &QueryMsg::Allocations {
                    beneficiary: beneficiary.to_string(),
                    start_after: None,
                    limit: Some(30),
                },
            )
            .unwrap()
    }

    pub fn query_all_allocations(&self) -> Vec<AllocationResponse> {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault.clone(),
                &QueryMsg::AllAllocations {
                    start_after: None,
                    limit: Some(30),
                },
            )
            .unwrap()
    }

    pub fn query_releasable(&self, beneficiary: &str, id: u64) -> Uint128 {
        self.app
            .wrap()
            .query_wasm_smart(
                self.vault.clone(),
                &QueryMsg::Releasable {
                    beneficiary: beneficiary.to_string(),
                    id,
                },
            )
            .unwrap()
    }

    pub fn token_balance(&self, addr: &Addr) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.token.clone(),
                &Cw20QueryMsg::Balance {
                    address: addr.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    //--------------------------------------------------------------------------------------------------
    // Block manipulation
    //--------------------------------------------------------------------------------------------------

    pub fn block_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn advance_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.time = block.time.plus_seconds(seconds);
            block.height += seconds / 6 + 1;
        });
    }

    //--------------------------------------------------------------------------------------------------
    // Invariants
    //--------------------------------------------------------------------------------------------------

    /// The vault's token balance must always equal the unclaimed remainder
    /// over every live allocation
    pub fn assert_custody_invariant(&self) {
        let outstanding = self
            .query_all_allocations()
            .iter()
            .map(|res| res.allocation.total - res.allocation.claimed)
            .sum::<Uint128>();
        assert_eq!(self.token_balance(&self.vault), outstanding);
    }
}

impl MockEnvBuilder {
    pub fn build(&mut self) -> AnyResult<MockEnv> {
        let owner = Addr::unchecked("owner");

        let token_code_id = self.app.store_code(Box::new(ContractWrapper::new(
            cw20_base::contract::execute,
            cw20_base::contract::instantiate,
            cw20_base::contract::query,
        )));
        let token = self.app.instantiate_contract(
            token_code_id,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Test Token".to_string(),
                symbol: "TEST".to_string(),
                decimals: 6,
                initial_balances: vec![Cw20Coin {
                    address: owner.to_string(),
                    amount: self.owner_balance,
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "test-token",
            None,
        )?;

        let vault_code_id = self.app.store_code(Box::new(ContractWrapper::new(
            contract::execute,
            contract::instantiate,
            contract::query,
        )));
        let vault = self.app.instantiate_contract(
            vault_code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                token: token.to_string(),
            },
            &[],
            "vesting-vault",
            None,
        )?;

        Ok(MockEnv {
            app: take(&mut self.app),
            owner,
            vault,
            token,
        })
    }

    pub fn owner_balance(&mut self, amount: u128) -> &mut Self {
        self.owner_balance = Uint128::new(amount);
        self
    }
}

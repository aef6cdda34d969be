use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use mars_owner::Owner;

use crate::types::{Allocation, Config};

pub const OWNER: Owner = Owner::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");

/// Allocations keyed by beneficiary and a globally unique id. Ids are never
/// reused, so a caller holding an id across a revoke of another allocation
/// can never end up addressing the wrong grant.
pub const ALLOCATIONS: Map<(&Addr, u64), Allocation> = Map::new("allocations");
pub const NEXT_ID: Item<u64> = Item::new("next_id");

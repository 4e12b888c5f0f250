use soroban_sdk::{contractevent, Address};

/// Emitted on every deposit (`is_add`) and withdrawal of liquidity.
/// Token fields and amounts are in the caller's argument order.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityAction {
    #[topic]
    pub token_x: Address,
    #[topic]
    pub token_y: Address,
    pub amount_x: i128,
    pub amount_y: i128,
    pub liquidity: i128,
    pub is_add: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swap {
    #[topic]
    pub token_in: Address,
    #[topic]
    pub token_out: Address,
    pub amount_in: i128,
    pub amount_out: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paused {
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpaused {
    pub owner: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    #[topic]
    pub previous_owner: Address,
    #[topic]
    pub new_owner: Address,
}

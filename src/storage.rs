use soroban_sdk::{contracttype, Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Pair(BytesN<32>),
    Liquidity(BytesN<32>, Address),
}

/// Administrative state shared by every pair in the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub owner: Address,
    pub paused: bool,
    pub fee_bps: u32,
}

/// Reserve and liquidity state for one unordered token pair.
///
/// `token_a` is always the smaller address; reserves follow that order.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairRecord {
    pub token_a: Address,
    pub token_b: Address,
    pub reserve_a: i128,
    pub reserve_b: i128,
    pub total_liquidity: i128,
}

impl PairRecord {
    pub fn empty(token_a: Address, token_b: Address) -> Self {
        PairRecord {
            token_a,
            token_b,
            reserve_a: 0,
            reserve_b: 0,
            total_liquidity: 0,
        }
    }

    /// Reserves re-expressed so the first element belongs to `token`.
    pub fn reserves_for(&self, token: &Address) -> (i128, i128) {
        if *token == self.token_a {
            (self.reserve_a, self.reserve_b)
        } else {
            (self.reserve_b, self.reserve_a)
        }
    }

    /// Writes reserves given in the order where the first element belongs to `token`.
    pub fn set_reserves_for(&mut self, token: &Address, reserve_x: i128, reserve_y: i128) {
        if *token == self.token_a {
            self.reserve_a = reserve_x;
            self.reserve_b = reserve_y;
        } else {
            self.reserve_a = reserve_y;
            self.reserve_b = reserve_x;
        }
    }
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<PoolConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn get_pair(env: &Env, key: &BytesN<32>) -> Option<PairRecord> {
    env.storage().persistent().get(&DataKey::Pair(key.clone()))
}

pub fn set_pair(env: &Env, key: &BytesN<32>, pair: &PairRecord) {
    let data_key = DataKey::Pair(key.clone());
    env.storage().persistent().set(&data_key, pair);
    env.storage().persistent().extend_ttl(
        &data_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn get_liquidity(env: &Env, key: &BytesN<32>, provider: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Liquidity(key.clone(), provider.clone()))
        .unwrap_or(0)
}

pub fn set_liquidity(env: &Env, key: &BytesN<32>, provider: &Address, amount: i128) {
    let data_key = DataKey::Liquidity(key.clone(), provider.clone());
    env.storage().persistent().set(&data_key, &amount);
    env.storage().persistent().extend_ttl(
        &data_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

use crate::types::{ContributionWindow, LiquiditySettings, Settlement};
use soroban_sdk::{contracttype, symbol_short, Address, Env, IntoVal, Symbol, Val};

// Symbol shared by every event of this contract.
pub const PRESALE: Symbol = symbol_short!("PRESALE");

pub const CREATED: Symbol = symbol_short!("created");
pub const GOAL_SET: Symbol = symbol_short!("goal_set");
pub const ENABLED: Symbol = symbol_short!("enabled");
pub const DEPOSIT: Symbol = symbol_short!("deposit");
pub const CONTRIB: Symbol = symbol_short!("contrib");
pub const REFUND: Symbol = symbol_short!("refund");
pub const CLAIM: Symbol = symbol_short!("claim");
pub const SETTLED: Symbol = symbol_short!("settled");
pub const WINDOW: Symbol = symbol_short!("window");
pub const LP_CFG: Symbol = symbol_short!("lp_cfg");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub owner: Address,
    pub reward_asset: Address,
    pub base_asset: Address,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoalSet {
    pub previous: i128,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvestingEnabled {
    pub owner: Address,
    pub goal: i128,
    pub reward_balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardDeposited {
    pub owner: Address,
    pub amount: i128,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRecorded {
    pub investor: Address,
    pub requested: i128,
    pub accepted: i128,
    pub entitlement: i128,
    pub total_raised: i128,
    pub goal_reached: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssued {
    pub investor: Address,
    pub amount: i128,
    pub forfeited: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimed {
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementCompleted {
    pub settlement: Settlement,
    pub base_amount: i128,
    pub reward_amount: i128,
    pub pair: Option<Address>,
    pub liquidity: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WindowChanged {
    pub window: Option<ContributionWindow>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquiditySettingsChanged {
    pub settings: LiquiditySettings,
}

pub(crate) fn publish<D>(env: &Env, topic: Symbol, data: D)
where
    D: IntoVal<Env, Val>,
{
    env.events().publish((PRESALE, topic), data);
}

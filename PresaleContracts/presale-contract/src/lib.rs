#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

mod access;
mod campaign;
mod errors;
mod events;
mod external;
mod funding;
mod ledger;
mod rewards;
mod settlement;
mod types;

pub use errors::{ErrorKind, PresaleError};
pub use events::{
    CampaignCreated, ContributionRecorded, GoalSet, InvestingEnabled, LiquiditySettingsChanged,
    RefundIssued, RewardClaimed, RewardDeposited, SettlementCompleted, WindowChanged, PRESALE,
};
pub use external::{ExchangeRouter, ExchangeRouterClient};
pub use ledger::RewardLedger;
pub use types::*;

use crate::campaign::CampaignManager;
use crate::funding::FundingManager;
use crate::rewards::RewardManager;
use crate::settlement::SettlementManager;

/// Single-campaign presale escrow.
///
/// Investors fund a goal in the base asset and earn a pro-rata share of the
/// reward asset the owner deposited. Once the goal is met the campaign is
/// concluded either by sweeping the base asset to the owner or by seeding a
/// liquidity pool on the exchange router.
#[contract]
pub struct PresaleContract;

#[contractimpl]
impl PresaleContract {
    /// Set up the campaign. Investing stays disabled until `enable`.
    pub fn initialize(
        env: Env,
        owner: Address,
        reward_asset: Address,
        base_asset: Address,
        exchange_router: Address,
        goal: i128,
    ) -> Result<(), PresaleError> {
        CampaignManager::initialize(&env, owner, reward_asset, base_asset, exchange_router, goal)
    }

    pub fn version() -> u32 {
        1
    }

    // Owner configuration, only while the campaign is still `Created`

    pub fn deposit_reward_asset(
        env: Env,
        caller: Address,
        amount: i128,
    ) -> Result<i128, PresaleError> {
        CampaignManager::deposit_reward_asset(&env, &caller, amount)
    }

    pub fn set_goal(env: Env, caller: Address, new_goal: i128) -> Result<(), PresaleError> {
        CampaignManager::set_goal(&env, &caller, new_goal)
    }

    pub fn set_window(
        env: Env,
        caller: Address,
        opens_at: u64,
        closes_at: u64,
    ) -> Result<(), PresaleError> {
        CampaignManager::set_window(&env, &caller, opens_at, closes_at)
    }

    pub fn clear_window(env: Env, caller: Address) -> Result<(), PresaleError> {
        CampaignManager::clear_window(&env, &caller)
    }

    pub fn set_liquidity_settings(
        env: Env,
        caller: Address,
        settings: LiquiditySettings,
    ) -> Result<(), PresaleError> {
        CampaignManager::set_liquidity_settings(&env, &caller, settings)
    }

    pub fn enable(env: Env, caller: Address) -> Result<(), PresaleError> {
        CampaignManager::enable(&env, &caller)
    }

    // Investor flows

    /// Returns the accepted amount, capped at what is left of the goal.
    pub fn contribute(env: Env, investor: Address, amount: i128) -> Result<i128, PresaleError> {
        FundingManager::contribute(&env, &investor, amount)
    }

    pub fn withdraw_contribution(env: Env, investor: Address) -> Result<i128, PresaleError> {
        FundingManager::withdraw_contribution(&env, &investor)
    }

    pub fn claim_reward(env: Env, investor: Address) -> Result<i128, PresaleError> {
        RewardManager::claim_reward(&env, &investor)
    }

    // Settlement

    pub fn sweep_base_currency(env: Env, caller: Address) -> Result<i128, PresaleError> {
        SettlementManager::sweep_base_currency(&env, &caller)
    }

    pub fn bootstrap_liquidity(
        env: Env,
        caller: Address,
    ) -> Result<LiquidityReceipt, PresaleError> {
        SettlementManager::bootstrap_liquidity(&env, &caller)
    }

    // Views

    pub fn get_campaign(env: Env) -> Result<Campaign, PresaleError> {
        CampaignManager::load(&env)
    }

    pub fn get_phase(env: Env) -> Result<Phase, PresaleError> {
        Ok(CampaignManager::load(&env)?.phase)
    }

    pub fn get_goal(env: Env) -> Result<i128, PresaleError> {
        Ok(CampaignManager::load(&env)?.goal)
    }

    pub fn is_enabled(env: Env) -> Result<bool, PresaleError> {
        Ok(CampaignManager::load(&env)?.is_enabled())
    }

    pub fn get_window(env: Env) -> Option<ContributionWindow> {
        CampaignManager::window(&env)
    }

    pub fn get_liquidity_settings(env: Env) -> LiquiditySettings {
        CampaignManager::liquidity_settings(&env)
    }

    pub fn get_position(env: Env, investor: Address) -> Position {
        RewardLedger::new(&env).position(&investor)
    }

    pub fn get_investment(env: Env, investor: Address) -> i128 {
        RewardLedger::new(&env).position(&investor).invested
    }

    pub fn get_reward(env: Env, investor: Address) -> i128 {
        RewardLedger::new(&env).position(&investor).entitled
    }

    pub fn get_totals(env: Env) -> Totals {
        RewardLedger::new(&env).totals()
    }
}

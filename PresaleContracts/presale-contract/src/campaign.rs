use crate::access::AccessControl;
use crate::errors::PresaleError;
use crate::events::{
    self, CampaignCreated, GoalSet, InvestingEnabled, LiquiditySettingsChanged, RewardDeposited,
    WindowChanged,
};
use crate::external::AssetGateway;
use crate::types::{
    Campaign, ContributionWindow, DataKey, LiquiditySettings, Phase, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD,
};
use soroban_sdk::{log, Address, Env};

pub struct CampaignManager;

impl CampaignManager {
    pub fn initialize(
        env: &Env,
        owner: Address,
        reward_asset: Address,
        base_asset: Address,
        exchange_router: Address,
        goal: i128,
    ) -> Result<(), PresaleError> {
        if env.storage().instance().has(&DataKey::Campaign) {
            return Err(PresaleError::AlreadyInitialized);
        }

        owner.require_auth();

        if goal <= 0 {
            return Err(PresaleError::InvalidGoal);
        }

        let this = env.current_contract_address();
        if reward_asset == base_asset
            || reward_asset == this
            || base_asset == this
            || exchange_router == this
        {
            return Err(PresaleError::InvalidAsset);
        }

        let campaign = Campaign {
            owner: owner.clone(),
            reward_asset: reward_asset.clone(),
            base_asset: base_asset.clone(),
            exchange_router,
            goal,
            phase: Phase::Created,
            created_at: env.ledger().timestamp(),
        };
        Self::save(env, &campaign);
        env.storage()
            .instance()
            .set(&DataKey::Liquidity, &LiquiditySettings::default_settings());

        events::publish(
            env,
            events::CREATED,
            CampaignCreated {
                owner,
                reward_asset,
                base_asset,
                goal,
            },
        );
        Ok(())
    }

    pub fn load(env: &Env) -> Result<Campaign, PresaleError> {
        env.storage()
            .instance()
            .get(&DataKey::Campaign)
            .ok_or(PresaleError::NotInitialized)
    }

    pub fn save(env: &Env, campaign: &Campaign) {
        env.storage().instance().set(&DataKey::Campaign, campaign);
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    /// Configuration changes are only allowed before investing is enabled.
    pub fn ensure_configurable(campaign: &Campaign) -> Result<(), PresaleError> {
        match campaign.phase {
            Phase::Created => Ok(()),
            Phase::Open | Phase::GoalReached => Err(PresaleError::AlreadyEnabled),
            Phase::Settled => Err(PresaleError::AlreadySettled),
        }
    }

    pub fn enable(env: &Env, caller: &Address) -> Result<(), PresaleError> {
        let mut campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        let reward_balance = AssetGateway::new(env, &campaign.reward_asset).held()?;

        campaign.phase = Phase::Open;
        Self::save(env, &campaign);

        log!(env, "investing enabled", campaign.goal, reward_balance);
        events::publish(
            env,
            events::ENABLED,
            InvestingEnabled {
                owner: campaign.owner,
                goal: campaign.goal,
                reward_balance,
            },
        );
        Ok(())
    }

    pub fn deposit_reward_asset(
        env: &Env,
        caller: &Address,
        amount: i128,
    ) -> Result<i128, PresaleError> {
        let campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        if amount <= 0 {
            return Err(PresaleError::InvalidAmount);
        }

        let reward = AssetGateway::new(env, &campaign.reward_asset);
        reward.pull(&campaign.owner, amount)?;
        let balance = reward.held()?;

        events::publish(
            env,
            events::DEPOSIT,
            RewardDeposited {
                owner: campaign.owner,
                amount,
                balance,
            },
        );
        Ok(balance)
    }

    pub fn set_goal(env: &Env, caller: &Address, new_goal: i128) -> Result<(), PresaleError> {
        let mut campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        if new_goal <= 0 {
            return Err(PresaleError::InvalidGoal);
        }

        let previous = campaign.goal;
        campaign.goal = new_goal;
        Self::save(env, &campaign);

        events::publish(
            env,
            events::GOAL_SET,
            GoalSet {
                previous,
                goal: new_goal,
            },
        );
        Ok(())
    }

    pub fn set_window(
        env: &Env,
        caller: &Address,
        opens_at: u64,
        closes_at: u64,
    ) -> Result<(), PresaleError> {
        let campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        if opens_at >= closes_at {
            return Err(PresaleError::InvalidWindow);
        }

        let window = ContributionWindow { opens_at, closes_at };
        env.storage().instance().set(&DataKey::Window, &window);

        events::publish(
            env,
            events::WINDOW,
            WindowChanged {
                window: Some(window),
            },
        );
        Ok(())
    }

    pub fn clear_window(env: &Env, caller: &Address) -> Result<(), PresaleError> {
        let campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        env.storage().instance().remove(&DataKey::Window);

        events::publish(env, events::WINDOW, WindowChanged { window: None });
        Ok(())
    }

    pub fn window(env: &Env) -> Option<ContributionWindow> {
        env.storage().instance().get(&DataKey::Window)
    }

    /// Rejects contributions outside the configured window, if any.
    pub fn ensure_within_window(env: &Env) -> Result<(), PresaleError> {
        let Some(window) = Self::window(env) else {
            return Ok(());
        };

        let now = env.ledger().timestamp();
        if now < window.opens_at {
            return Err(PresaleError::WindowNotOpen);
        }
        if now > window.closes_at {
            return Err(PresaleError::WindowClosed);
        }
        Ok(())
    }

    pub fn set_liquidity_settings(
        env: &Env,
        caller: &Address,
        settings: LiquiditySettings,
    ) -> Result<(), PresaleError> {
        let campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_configurable(&campaign)?;

        if settings.deadline_window == 0 {
            return Err(PresaleError::InvalidSettings);
        }

        env.storage().instance().set(&DataKey::Liquidity, &settings);

        events::publish(env, events::LP_CFG, LiquiditySettingsChanged { settings });
        Ok(())
    }

    pub fn liquidity_settings(env: &Env) -> LiquiditySettings {
        env.storage()
            .instance()
            .get(&DataKey::Liquidity)
            .unwrap_or_else(LiquiditySettings::default_settings)
    }
}

use crate::access::AccessControl;
use crate::campaign::CampaignManager;
use crate::errors::PresaleError;
use crate::events::{self, SettlementCompleted};
use crate::external::{AssetGateway, ExchangeGateway};
use crate::types::{Campaign, LiquidityReceipt, Phase, Settlement};
use soroban_sdk::{log, Address, Env};

pub struct SettlementManager;

impl SettlementManager {
    fn ensure_settleable(campaign: &Campaign) -> Result<(), PresaleError> {
        match campaign.phase {
            Phase::GoalReached => Ok(()),
            Phase::Settled => Err(PresaleError::AlreadySettled),
            Phase::Created | Phase::Open => Err(PresaleError::GoalNotReached),
        }
    }

    /// Sends every unit of base currency held by the campaign to the owner.
    pub fn sweep_base_currency(env: &Env, caller: &Address) -> Result<i128, PresaleError> {
        let mut campaign = AccessControl::require_owner(env, caller)?;
        Self::ensure_settleable(&campaign)?;

        let base = AssetGateway::new(env, &campaign.base_asset);
        let swept = base.held()?;
        if swept > 0 {
            base.push(&campaign.owner, swept)?;
        }

        campaign.phase = Phase::Settled;
        CampaignManager::save(env, &campaign);

        log!(env, "campaign swept", swept);
        events::publish(
            env,
            events::SETTLED,
            SettlementCompleted {
                settlement: Settlement::Sweep,
                base_amount: swept,
                reward_amount: 0,
                pair: None,
                liquidity: 0,
            },
        );
        Ok(swept)
    }

    /// Moves the campaign's whole base-currency and reward-asset balances into
    /// a (reward asset, base asset) pool on the exchange router.
    pub fn bootstrap_liquidity(
        env: &Env,
        caller: &Address,
    ) -> Result<LiquidityReceipt, PresaleError> {
        caller.require_auth();

        let mut campaign = CampaignManager::load(env)?;
        Self::ensure_settleable(&campaign)?;

        let settings = CampaignManager::liquidity_settings(env);
        let this = env.current_contract_address();
        let router = &campaign.exchange_router;

        let reward = AssetGateway::new(env, &campaign.reward_asset);
        let base = AssetGateway::new(env, &campaign.base_asset);
        let reward_balance = reward.held()?;
        let base_balance = base.held()?;

        // Allowances only need to outlive this invocation.
        let sequence = env.ledger().sequence();
        reward.approve(router, reward_balance, sequence)?;
        base.approve(router, base_balance, sequence)?;

        let exchange = ExchangeGateway::new(env, router);
        let pair = exchange.create_pair(reward.address(), base.address())?;

        let recipient = settings.recipient.unwrap_or_else(|| this.clone());
        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(settings.deadline_window)
            .ok_or(PresaleError::ArithmeticOverflow)?;
        let (reward_used, base_used, liquidity) = exchange.add_liquidity(
            &this,
            reward.address(),
            base.address(),
            reward_balance,
            base_balance,
            &recipient,
            deadline,
        )?;

        AssetGateway::new(env, &pair).approve(
            router,
            i128::MAX,
            env.ledger().max_live_until_ledger(),
        )?;

        campaign.phase = Phase::Settled;
        CampaignManager::save(env, &campaign);

        log!(env, "liquidity bootstrapped", pair, liquidity);
        events::publish(
            env,
            events::SETTLED,
            SettlementCompleted {
                settlement: Settlement::Liquidity,
                base_amount: base_used,
                reward_amount: reward_used,
                pair: Some(pair.clone()),
                liquidity,
            },
        );
        Ok(LiquidityReceipt {
            pair,
            reward_used,
            base_used,
            liquidity,
        })
    }
}

use crate::campaign::CampaignManager;
use crate::errors::PresaleError;
use crate::events::{self, ContributionRecorded, RefundIssued};
use crate::external::AssetGateway;
use crate::ledger::RewardLedger;
use crate::types::Phase;
use soroban_sdk::{log, Address, Env};

pub struct FundingManager;

impl FundingManager {
    /// Accepts up to the remaining goal from `investor` and returns the amount
    /// actually taken. Only the accepted part is ever debited.
    pub fn contribute(env: &Env, investor: &Address, amount: i128) -> Result<i128, PresaleError> {
        investor.require_auth();

        let mut campaign = CampaignManager::load(env)?;
        match campaign.phase {
            Phase::Open => {}
            Phase::Created => return Err(PresaleError::NotOpen),
            Phase::GoalReached => return Err(PresaleError::GoalAlreadyReached),
            Phase::Settled => return Err(PresaleError::AlreadySettled),
        }
        CampaignManager::ensure_within_window(env)?;

        if amount <= 0 {
            return Err(PresaleError::InvalidAmount);
        }

        let ledger = RewardLedger::new(env);
        let remaining = campaign.goal - ledger.totals().total_raised;
        if remaining <= 0 {
            return Err(PresaleError::GoalAlreadyReached);
        }
        let accepted = amount.min(remaining);

        let reward_balance = AssetGateway::new(env, &campaign.reward_asset).held()?;
        AssetGateway::new(env, &campaign.base_asset).pull(investor, accepted)?;

        let entitlement =
            ledger.record_contribution(investor, accepted, reward_balance, campaign.goal)?;
        let total_raised = ledger.totals().total_raised;

        let goal_reached = total_raised == campaign.goal;
        if goal_reached {
            campaign.phase = Phase::GoalReached;
            CampaignManager::save(env, &campaign);
            log!(env, "goal reached", total_raised);
        }

        events::publish(
            env,
            events::CONTRIB,
            ContributionRecorded {
                investor: investor.clone(),
                requested: amount,
                accepted,
                entitlement,
                total_raised,
                goal_reached,
            },
        );
        Ok(accepted)
    }

    /// Returns the investor's whole outstanding contribution and drops the
    /// entitlement that came with it. Available in every phase but `Settled`.
    pub fn withdraw_contribution(env: &Env, investor: &Address) -> Result<i128, PresaleError> {
        investor.require_auth();

        let campaign = CampaignManager::load(env)?;
        if campaign.phase == Phase::Settled {
            return Err(PresaleError::AlreadySettled);
        }

        let ledger = RewardLedger::new(env);
        let position = ledger.position(investor);
        if position.invested <= 0 {
            return Err(PresaleError::NoPosition);
        }

        AssetGateway::new(env, &campaign.base_asset).push(investor, position.invested)?;
        ledger.clear(investor)?;

        events::publish(
            env,
            events::REFUND,
            RefundIssued {
                investor: investor.clone(),
                amount: position.invested,
                forfeited: position.entitled,
            },
        );
        Ok(position.invested)
    }
}

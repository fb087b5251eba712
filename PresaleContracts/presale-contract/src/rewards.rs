use crate::campaign::CampaignManager;
use crate::errors::PresaleError;
use crate::events::{self, RewardClaimed};
use crate::external::AssetGateway;
use crate::ledger::RewardLedger;
use crate::types::Phase;
use soroban_sdk::{Address, Env};

pub struct RewardManager;

impl RewardManager {
    /// Pays out the investor's entitlement and closes their position.
    pub fn claim_reward(env: &Env, investor: &Address) -> Result<i128, PresaleError> {
        investor.require_auth();

        let campaign = CampaignManager::load(env)?;
        if !matches!(campaign.phase, Phase::GoalReached | Phase::Settled) {
            return Err(PresaleError::GoalNotReached);
        }

        let ledger = RewardLedger::new(env);
        let position = ledger.position(investor);
        if position.invested <= 0 || position.entitled <= 0 {
            return Err(PresaleError::NothingToClaim);
        }

        // Ledger is only touched once the transfer went through.
        AssetGateway::new(env, &campaign.reward_asset).push(investor, position.entitled)?;
        ledger.clear(investor)?;

        events::publish(
            env,
            events::CLAIM,
            RewardClaimed {
                investor: investor.clone(),
                amount: position.entitled,
            },
        );
        Ok(position.entitled)
    }
}

use crate::campaign::CampaignManager;
use crate::errors::PresaleError;
use crate::types::Campaign;
use soroban_sdk::{Address, Env};

pub struct AccessControl;

impl AccessControl {
    /// Authenticates `caller` and checks it holds the owner role.
    ///
    /// Returns the loaded campaign so owner-only operations do not read it twice.
    pub fn require_owner(env: &Env, caller: &Address) -> Result<Campaign, PresaleError> {
        let campaign = CampaignManager::load(env)?;
        caller.require_auth();

        if caller != &campaign.owner {
            return Err(PresaleError::Unauthorized);
        }

        Ok(campaign)
    }
}

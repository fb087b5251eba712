use crate::errors::PresaleError;
use crate::types::{
    DataKey, Position, Totals, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    POSITION_BUMP_AMOUNT, POSITION_LIFETIME_THRESHOLD,
};
use soroban_sdk::{Address, Env};

/// Per-investor contribution and entitlement accounting.
///
/// Positions live in persistent storage under `DataKey::Position`; an absent
/// key is the only representation of "no stake". `Totals` always equals the
/// sum over the stored positions.
pub struct RewardLedger<'a> {
    env: &'a Env,
}

impl<'a> RewardLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    /// Reward share for `amount` out of `goal`, floored to the smallest unit.
    pub fn entitlement_for(
        amount: i128,
        reward_balance: i128,
        goal: i128,
    ) -> Result<i128, PresaleError> {
        if goal <= 0 {
            return Err(PresaleError::InvalidGoal);
        }
        if amount <= 0 || reward_balance < 0 {
            return Err(PresaleError::InvalidAmount);
        }

        reward_balance
            .checked_mul(amount)
            .map(|scaled| scaled / goal)
            .ok_or(PresaleError::ArithmeticOverflow)
    }

    /// Adds `amount` to the investor's stake and credits the matching share of
    /// `reward_balance`. Returns the entitlement credited by this call.
    pub fn record_contribution(
        &self,
        investor: &Address,
        amount: i128,
        reward_balance: i128,
        goal: i128,
    ) -> Result<i128, PresaleError> {
        let entitlement = Self::entitlement_for(amount, reward_balance, goal)?;

        let key = DataKey::Position(investor.clone());
        let existing: Option<Position> = self.env.storage().persistent().get(&key);
        let mut totals = self.totals();

        let mut position = match existing {
            Some(position) => position,
            None => {
                totals.investors = totals
                    .investors
                    .checked_add(1)
                    .ok_or(PresaleError::ArithmeticOverflow)?;
                Position::default()
            }
        };

        position.invested = position
            .invested
            .checked_add(amount)
            .ok_or(PresaleError::ArithmeticOverflow)?;
        position.entitled = position
            .entitled
            .checked_add(entitlement)
            .ok_or(PresaleError::ArithmeticOverflow)?;
        totals.total_raised = totals
            .total_raised
            .checked_add(amount)
            .ok_or(PresaleError::ArithmeticOverflow)?;
        totals.total_entitled = totals
            .total_entitled
            .checked_add(entitlement)
            .ok_or(PresaleError::ArithmeticOverflow)?;

        self.env.storage().persistent().set(&key, &position);
        self.env.storage().persistent().extend_ttl(
            &key,
            POSITION_LIFETIME_THRESHOLD,
            POSITION_BUMP_AMOUNT,
        );
        self.save_totals(&totals);

        Ok(entitlement)
    }

    /// Removes the investor's position and returns what it held.
    pub fn clear(&self, investor: &Address) -> Result<Position, PresaleError> {
        let key = DataKey::Position(investor.clone());
        let position: Position = self
            .env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(PresaleError::NoPosition)?;

        let mut totals = self.totals();
        totals.total_raised -= position.invested;
        totals.total_entitled -= position.entitled;
        totals.investors -= 1;

        self.env.storage().persistent().remove(&key);
        self.save_totals(&totals);

        Ok(position)
    }

    pub fn position(&self, investor: &Address) -> Position {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Position(investor.clone()))
            .unwrap_or_default()
    }

    pub fn totals(&self) -> Totals {
        self.env
            .storage()
            .instance()
            .get(&DataKey::Totals)
            .unwrap_or_default()
    }

    fn save_totals(&self, totals: &Totals) {
        self.env.storage().instance().set(&DataKey::Totals, totals);
        self.env
            .storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}

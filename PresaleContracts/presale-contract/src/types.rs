use soroban_sdk::{contracttype, Address};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const POSITION_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
pub(crate) const POSITION_LIFETIME_THRESHOLD: u32 = POSITION_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Seconds the exchange router is given to execute `add_liquidity`.
pub const DEFAULT_DEADLINE_WINDOW: u64 = 300;

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Campaign,          // Campaign configuration and phase
    Window,            // Optional contribution window
    Liquidity,         // LiquiditySettings
    Totals,            // Aggregate ledger totals
    Position(Address), // Investor -> Position
}

/// Lifecycle of a campaign.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Created,     // Disabled, goal mutable, reward asset may be deposited
    Open,        // Accepting contributions
    GoalReached, // total_raised == goal, contributions closed
    Settled,     // Swept or liquidity bootstrapped
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub owner: Address,
    pub reward_asset: Address,
    /// Settlement token; the native asset contract on a live network.
    pub base_asset: Address,
    pub exchange_router: Address,
    pub goal: i128,
    pub phase: Phase,
    pub created_at: u64,
}

impl Campaign {
    pub fn is_enabled(&self) -> bool {
        matches!(self.phase, Phase::Open | Phase::GoalReached)
    }
}

/// Ledger-time interval (inclusive) during which contributions are accepted.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContributionWindow {
    pub opens_at: u64,
    pub closes_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquiditySettings {
    /// Receiver of the LP tokens. `None` keeps them locked in the campaign.
    pub recipient: Option<Address>,
    /// Added to the ledger timestamp to form the router deadline.
    pub deadline_window: u64,
}

impl LiquiditySettings {
    pub fn default_settings() -> Self {
        Self {
            recipient: None,
            deadline_window: DEFAULT_DEADLINE_WINDOW,
        }
    }
}

/// Outstanding stake of a single investor.
#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub invested: i128, // Base currency, smallest unit
    pub entitled: i128, // Reward asset, smallest unit
}

#[contracttype]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Totals {
    pub total_raised: i128,
    pub total_entitled: i128,
    pub investors: u32,
}

/// Result of a successful liquidity bootstrap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LiquidityReceipt {
    pub pair: Address,
    pub reward_used: i128,
    pub base_used: i128,
    pub liquidity: i128,
}

/// How a campaign was concluded.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Settlement {
    Sweep,
    Liquidity,
}

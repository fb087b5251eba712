use crate::errors::PresaleError;
use soroban_sdk::{contractclient, token::TokenClient, Address, Env};

/// Interface of the exchange router the campaign hands its balances to.
///
/// `add_liquidity` pulls both amounts from `provider` using allowances the
/// provider granted beforehand, and mints the pair's LP tokens to `to`.
#[allow(dead_code)]
#[contractclient(name = "ExchangeRouterClient")]
pub trait ExchangeRouter {
    /// Creates (or returns the existing) pair for the two tokens.
    fn create_pair(env: Env, token_a: Address, token_b: Address) -> Address;

    /// Returns `(used_a, used_b, liquidity)`.
    fn add_liquidity(
        env: Env,
        provider: Address,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);
}

/// Token calls made on behalf of the campaign contract.
///
/// Every call goes through the generated `try_*` methods so that a rejected
/// call and a trapping token both surface as a [`PresaleError`].
pub struct AssetGateway<'a> {
    env: &'a Env,
    client: TokenClient<'a>,
}

impl<'a> AssetGateway<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Self {
            env,
            client: TokenClient::new(env, asset),
        }
    }

    pub fn address(&self) -> &Address {
        &self.client.address
    }

    /// Balance held by the campaign contract.
    pub fn held(&self) -> Result<i128, PresaleError> {
        match self.client.try_balance(&self.env.current_contract_address()) {
            Ok(Ok(balance)) => Ok(balance),
            _ => Err(PresaleError::BalanceQueryFailed),
        }
    }

    /// Moves `amount` from `from` into the campaign contract.
    pub fn pull(&self, from: &Address, amount: i128) -> Result<(), PresaleError> {
        match self
            .client
            .try_transfer(from, &self.env.current_contract_address(), &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(PresaleError::TransferFailed),
        }
    }

    /// Moves `amount` out of the campaign contract to `to`.
    pub fn push(&self, to: &Address, amount: i128) -> Result<(), PresaleError> {
        match self
            .client
            .try_transfer(&self.env.current_contract_address(), to, &amount)
        {
            Ok(Ok(())) => Ok(()),
            _ => Err(PresaleError::TransferFailed),
        }
    }

    /// Lets `spender` move up to `amount` of the campaign's balance until
    /// `live_until_ledger`.
    pub fn approve(
        &self,
        spender: &Address,
        amount: i128,
        live_until_ledger: u32,
    ) -> Result<(), PresaleError> {
        match self.client.try_approve(
            &self.env.current_contract_address(),
            spender,
            &amount,
            &live_until_ledger,
        ) {
            Ok(Ok(())) => Ok(()),
            _ => Err(PresaleError::ApprovalFailed),
        }
    }
}

pub struct ExchangeGateway<'a> {
    client: ExchangeRouterClient<'a>,
}

impl<'a> ExchangeGateway<'a> {
    pub fn new(env: &'a Env, router: &Address) -> Self {
        Self {
            client: ExchangeRouterClient::new(env, router),
        }
    }

    pub fn create_pair(&self, token_a: &Address, token_b: &Address) -> Result<Address, PresaleError> {
        match self.client.try_create_pair(token_a, token_b) {
            Ok(Ok(pair)) => Ok(pair),
            _ => Err(PresaleError::PairCreationFailed),
        }
    }

    /// Deposits both full amounts with no slippage floor.
    pub fn add_liquidity(
        &self,
        provider: &Address,
        token_a: &Address,
        token_b: &Address,
        amount_a: i128,
        amount_b: i128,
        to: &Address,
        deadline: u64,
    ) -> Result<(i128, i128, i128), PresaleError> {
        match self.client.try_add_liquidity(
            provider, token_a, token_b, &amount_a, &amount_b, &0, &0, to, &deadline,
        ) {
            Ok(Ok(used)) => Ok(used),
            _ => Err(PresaleError::LiquidityProvisionFailed),
        }
    }
}

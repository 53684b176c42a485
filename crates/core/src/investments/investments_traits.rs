use crate::errors::Result;
use crate::investments::investments_model::{Investment, InvestmentUpdate, NewInvestment};
use async_trait::async_trait;

/// Trait for record store operations on investments.
///
/// The store guarantees unique ids and field-lossless round-trips; ordering
/// and filtering of the returned collection are the caller's job.
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    fn load_investments(&self) -> Result<Vec<Investment>>;
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;
    async fn insert_new_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    async fn update_investment(&self, investment_update: InvestmentUpdate) -> Result<Investment>;
    async fn delete_investment(&self, investment_id: String) -> Result<usize>;
}

/// Trait for investment service operations.
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    /// Returns all records, most recently created first.
    fn get_investments(&self) -> Result<Vec<Investment>>;
    fn get_investment(&self, investment_id: &str) -> Result<Investment>;
    async fn create_investment(&self, new_investment: NewInvestment) -> Result<Investment>;
    async fn update_investment(&self, investment_update: InvestmentUpdate) -> Result<Investment>;
    async fn delete_investment(&self, investment_id: String) -> Result<usize>;
}

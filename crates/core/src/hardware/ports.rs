//! Port interface for hardware inventory operations

use async_trait::async_trait;
use shoptrack_domain::{
    HardwareItem, HardwarePage, HardwarePatch, NewHardware, Result, StockAdjustment,
    StockDirection,
};

/// Trait for the remote hardware endpoints.
#[async_trait]
pub trait HardwareGateway: Send + Sync {
    /// Fetch a window of the inventory in server order.
    async fn list_hardware(&self, limit: u32, offset: u32) -> Result<HardwarePage>;

    /// Create an item and return the server's canonical record.
    async fn create_hardware(&self, item: &NewHardware) -> Result<HardwareItem>;

    /// Apply a partial update and return the refreshed record.
    async fn update_hardware(&self, id: i64, patch: &HardwarePatch) -> Result<HardwareItem>;

    /// Move stock in or out by barcode and return the adjusted item.
    async fn adjust_stock(
        &self,
        direction: StockDirection,
        adjustment: &StockAdjustment,
    ) -> Result<HardwareItem>;
}

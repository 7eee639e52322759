//! Hardware inventory service

use std::sync::Arc;

use shoptrack_domain::{
    HardwareItem, HardwarePage, HardwarePatch, NewHardware, Result, ShopTrackError,
    StockAdjustment, StockDirection,
};
use tracing::debug;

use super::ports::HardwareGateway;

/// Default page size for inventory listings.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub struct HardwareService {
    gateway: Arc<dyn HardwareGateway>,
}

impl HardwareService {
    pub fn new(gateway: Arc<dyn HardwareGateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self, limit: u32, offset: u32) -> Result<HardwarePage> {
        self.gateway.list_hardware(limit, offset).await
    }

    /// First page of the inventory at the default page size.
    pub async fn list_first_page(&self) -> Result<HardwarePage> {
        self.list(DEFAULT_PAGE_SIZE, 0).await
    }

    pub async fn create(&self, item: NewHardware) -> Result<HardwareItem> {
        if item.barcode.is_empty() {
            return Err(ShopTrackError::Validation(
                "a hardware item needs a non-empty barcode".to_string(),
            ));
        }
        if item.description.is_empty() {
            return Err(ShopTrackError::Validation(
                "a hardware item needs a non-empty description".to_string(),
            ));
        }
        debug!(barcode = %item.barcode, "creating hardware item");
        self.gateway.create_hardware(&item).await
    }

    pub async fn update(&self, id: i64, patch: HardwarePatch) -> Result<HardwareItem> {
        debug!(id, "updating hardware item");
        self.gateway.update_hardware(id, &patch).await
    }

    /// Book received goods into stock.
    pub async fn receive(
        &self,
        barcode: &str,
        quantity: i64,
        note: Option<String>,
    ) -> Result<HardwareItem> {
        self.adjust(StockDirection::Receive, barcode, quantity, note).await
    }

    /// Book consumed goods (sold or installed) out of stock.
    pub async fn consume(
        &self,
        barcode: &str,
        quantity: i64,
        note: Option<String>,
    ) -> Result<HardwareItem> {
        self.adjust(StockDirection::Consume, barcode, quantity, note).await
    }

    async fn adjust(
        &self,
        direction: StockDirection,
        barcode: &str,
        quantity: i64,
        note: Option<String>,
    ) -> Result<HardwareItem> {
        if barcode.is_empty() {
            return Err(ShopTrackError::Validation(
                "a stock adjustment needs a barcode".to_string(),
            ));
        }
        // Whether the server enforces this too is unknown; the guard is
        // kept client-side either way.
        if quantity <= 0 {
            return Err(ShopTrackError::Validation(
                "stock adjustment quantity must be a positive integer".to_string(),
            ));
        }
        let adjustment = StockAdjustment { barcode: barcode.to_string(), quantity, note };
        debug!(barcode, quantity, direction = direction.as_path(), "adjusting stock");
        self.gateway.adjust_stock(direction, &adjustment).await
    }
}

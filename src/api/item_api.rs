// ==========================================
// 仓储库存管理系统 - 库存物品 API
// ==========================================
// 职责: 物品查询、CRUD、低库存列表、物品清单 CSV 导出
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::item::InventoryItem;
use crate::export::csv_exporter::export_records;
use crate::repository::ItemRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// NewItem - 物品创建请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewItem {
    pub item_id: Option<String>, // 缺省时生成 UUID
    pub name: String,
    pub quantity: i64,
    pub min_quantity: i64,
    pub category: Option<String>,
    pub price: Option<f64>,
}

// ==========================================
// ItemCsvRecord - 物品清单 CSV 行
// ==========================================
#[derive(Debug, Serialize)]
struct ItemCsvRecord {
    id: String,
    name: String,
    quantity: i64,
    min_quantity: i64,
    category: String,
    status: &'static str,
    price: String,
}

impl From<&InventoryItem> for ItemCsvRecord {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.item_id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            min_quantity: item.min_quantity,
            category: item.category.clone().unwrap_or_default(),
            status: item.status.as_str(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
        }
    }
}

// ==========================================
// ItemApi - 库存物品 API
// ==========================================
pub struct ItemApi {
    item_repo: Arc<dyn ItemRepository>,
}

impl ItemApi {
    /// 创建新的 ItemApi 实例
    pub fn new(item_repo: Arc<dyn ItemRepository>) -> Self {
        Self { item_repo }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询全部物品
    pub async fn list_items(&self) -> ApiResult<Vec<InventoryItem>> {
        Ok(self.item_repo.list_items().await?)
    }

    /// 按 item_id 查询物品
    pub async fn get_item(&self, item_id: &str) -> ApiResult<InventoryItem> {
        self.item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("物品不存在: {}", item_id)))
    }

    /// 查询低库存物品（含缺货）
    pub async fn list_low_stock(&self) -> ApiResult<Vec<InventoryItem>> {
        let items = self.item_repo.list_items().await?;
        Ok(items.into_iter().filter(|i| i.is_below_min()).collect())
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 创建物品
    ///
    /// # 验证
    /// - name 非空
    /// - quantity / min_quantity 非负
    pub async fn create_item(&self, request: NewItem) -> ApiResult<InventoryItem> {
        Self::validate(&request.name, request.quantity, request.min_quantity)?;

        let item_id = match request.item_id {
            Some(id) if !id.trim().is_empty() => id.trim().to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let item = InventoryItem::new(
            item_id,
            request.name.trim().to_string(),
            request.quantity,
            request.min_quantity,
            request.category,
            request.price,
        );

        let created = self.item_repo.insert_item(item).await?;
        info!(item_id = %created.item_id, "物品创建成功");
        Ok(created)
    }

    /// 整体更新物品
    pub async fn update_item(&self, item: InventoryItem) -> ApiResult<InventoryItem> {
        Self::validate(&item.name, item.quantity, item.min_quantity)?;

        self.item_repo
            .update_item(item)
            .await?
            .ok_or_else(|| ApiError::NotFound("待更新的物品不存在".to_string()))
    }

    /// 删除物品
    pub async fn delete_item(&self, item_id: &str) -> ApiResult<()> {
        if self.item_repo.delete_item(item_id).await? {
            info!(item_id = %item_id, "物品删除成功");
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("物品不存在: {}", item_id)))
        }
    }

    // ==========================================
    // 导出接口
    // ==========================================

    /// 导出物品清单为 CSV 字节流
    ///
    /// 所有字段双引号包裹；无物品时产出零字节
    pub async fn export_items_csv(&self) -> ApiResult<Vec<u8>> {
        let items = self.item_repo.list_items().await?;
        debug!(count = items.len(), "导出物品清单");

        let records: Vec<ItemCsvRecord> = items.iter().map(ItemCsvRecord::from).collect();
        Ok(export_records(&records)?)
    }

    /// 通用参数验证
    fn validate(name: &str, quantity: i64, min_quantity: i64) -> ApiResult<()> {
        if name.trim().is_empty() {
            return Err(ApiError::InvalidInput("物品名称不能为空".to_string()));
        }
        if quantity < 0 {
            return Err(ApiError::InvalidInput("库存数量不能为负".to_string()));
        }
        if min_quantity < 0 {
            return Err(ApiError::InvalidInput("安全库存不能为负".to_string()));
        }
        Ok(())
    }
}

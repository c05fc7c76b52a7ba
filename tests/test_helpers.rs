// ==========================================
// 仓储库存管理系统 - 集成测试辅助
// ==========================================
// 提供: 临时数据库、测试 CSV 文件、内存/故障仓储 mock
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use warehouse_inventory::domain::item::InventoryItem;
use warehouse_inventory::repository::{
    ItemRepository, RepositoryError, RepositoryResult, SqliteItemRepository,
};

// ==========================================
// 辅助函数: 创建测试数据库
// ==========================================
pub fn create_test_db() -> (NamedTempFile, Arc<SqliteItemRepository>) {
    let temp_file = NamedTempFile::new().expect("创建临时数据库文件失败");
    let db_path = temp_file.path().to_str().expect("路径编码失败").to_string();
    let repo = SqliteItemRepository::new(&db_path).expect("创建Repository失败");
    (temp_file, Arc::new(repo))
}

// ==========================================
// 辅助函数: 创建测试物品
// ==========================================
pub fn test_item(id: &str, name: &str, quantity: i64) -> InventoryItem {
    InventoryItem::new(
        id.to_string(),
        name.to_string(),
        quantity,
        5,
        Some("测试分类".to_string()),
        None,
    )
}

// ==========================================
// 辅助函数: 创建测试 CSV 文件（.csv 后缀）
// ==========================================
pub fn create_stock_csv(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("创建临时CSV失败");
    for line in lines {
        writeln!(temp_file, "{}", line).expect("写入CSV失败");
    }
    temp_file
}

// ==========================================
// MemoryItemRepository - 内存仓储 mock
// ==========================================
pub struct MemoryItemRepository {
    items: Mutex<Vec<InventoryItem>>,
}

impl MemoryItemRepository {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self.items.lock().unwrap().clone())
    }

    async fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.item_id == item_id)
            .cloned())
    }

    async fn insert_item(&self, item: InventoryItem) -> RepositoryResult<InventoryItem> {
        self.items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn update_item(&self, item: InventoryItem) -> RepositoryResult<Option<InventoryItem>> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.item_id == item.item_id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    async fn update_quantity(
        &self,
        item_id: &str,
        quantity: i64,
    ) -> RepositoryResult<Option<InventoryItem>> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.item_id == item_id) {
            Some(item) => {
                item.quantity = quantity;
                item.refresh_status();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_item(&self, item_id: &str) -> RepositoryResult<bool> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.item_id != item_id);
        Ok(items.len() < before)
    }
}

// ==========================================
// FailingItemRepository - 更新总是报错的仓储 mock
// ==========================================
// 用途: 验证行级错误被吞掉且批次继续
pub struct FailingItemRepository {
    items: Vec<InventoryItem>,
}

impl FailingItemRepository {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemRepository for FailingItemRepository {
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self.items.clone())
    }

    async fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>> {
        Ok(self.items.iter().find(|i| i.item_id == item_id).cloned())
    }

    async fn insert_item(&self, _item: InventoryItem) -> RepositoryResult<InventoryItem> {
        Err(RepositoryError::DatabaseQueryError("数据库连接中断".to_string()))
    }

    async fn update_item(&self, _item: InventoryItem) -> RepositoryResult<Option<InventoryItem>> {
        Err(RepositoryError::DatabaseQueryError("数据库连接中断".to_string()))
    }

    async fn update_quantity(
        &self,
        _item_id: &str,
        _quantity: i64,
    ) -> RepositoryResult<Option<InventoryItem>> {
        Err(RepositoryError::DatabaseQueryError("数据库连接中断".to_string()))
    }

    async fn delete_item(&self, _item_id: &str) -> RepositoryResult<bool> {
        Err(RepositoryError::DatabaseQueryError("数据库连接中断".to_string()))
    }
}

// ==========================================
// RejectingItemRepository - 更新返回空的仓储 mock
// ==========================================
// 用途: 验证"更新被拒绝"落入 failed 终态
pub struct RejectingItemRepository {
    items: Vec<InventoryItem>,
}

impl RejectingItemRepository {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl ItemRepository for RejectingItemRepository {
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        Ok(self.items.clone())
    }

    async fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>> {
        Ok(self.items.iter().find(|i| i.item_id == item_id).cloned())
    }

    async fn insert_item(&self, item: InventoryItem) -> RepositoryResult<InventoryItem> {
        Ok(item)
    }

    async fn update_item(&self, _item: InventoryItem) -> RepositoryResult<Option<InventoryItem>> {
        Ok(None)
    }

    async fn update_quantity(
        &self,
        _item_id: &str,
        _quantity: i64,
    ) -> RepositoryResult<Option<InventoryItem>> {
        Ok(None)
    }

    async fn delete_item(&self, _item_id: &str) -> RepositoryResult<bool> {
        Ok(false)
    }
}

// ==========================================
// 仓储库存管理系统 - 库存物品仓储 Trait
// ==========================================
// 职责: 定义库存物品数据访问接口（不包含实现）
// ==========================================

use crate::domain::item::InventoryItem;
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;

// ==========================================
// ItemRepository Trait
// ==========================================
// 用途: 库存物品数据访问主接口
// 实现者: SqliteItemRepository；测试中可 mock
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// 查询全部物品（按 item_id 排序，顺序稳定）
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>>;

    /// 按 item_id 查询物品
    ///
    /// # 返回
    /// - Ok(Some(InventoryItem)): 找到记录
    /// - Ok(None): 未找到记录
    async fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>>;

    /// 插入新物品（item_id 已存在时返回唯一约束错误）
    async fn insert_item(&self, item: InventoryItem) -> RepositoryResult<InventoryItem>;

    /// 整体更新物品（按 item_id 定位）
    ///
    /// # 返回
    /// - Ok(Some(InventoryItem)): 更新后的物品
    /// - Ok(None): item_id 不存在
    async fn update_item(&self, item: InventoryItem) -> RepositoryResult<Option<InventoryItem>>;

    /// 仅更新数量（对账导入的唯一写入口，状态随数量重新派生）
    ///
    /// # 返回
    /// - Ok(Some(InventoryItem)): 更新后的物品
    /// - Ok(None): item_id 不存在（调用方按"更新被拒绝"处理）
    ///
    /// # 说明
    /// - 每次调用幂等，无批量变体
    async fn update_quantity(
        &self,
        item_id: &str,
        quantity: i64,
    ) -> RepositoryResult<Option<InventoryItem>>;

    /// 删除物品
    ///
    /// # 返回
    /// - Ok(true): 删除成功
    /// - Ok(false): item_id 不存在
    async fn delete_item(&self, item_id: &str) -> RepositoryResult<bool>;
}

// ==========================================
// 仓储库存管理系统 - 对账导入 API
// ==========================================
// 职责: 触发导入并回读库存全量快照
// 红线: 导入完成后重新拉取物品列表，不信任累计 delta
//       （一致性优先于性能）
// ==========================================

use crate::api::error::ApiResult;
use crate::config::ImportConfigReader;
use crate::domain::import::StockImportResult;
use crate::domain::item::InventoryItem;
use crate::importer::stock_importer::{StockImporter, StockImporterImpl};
use crate::repository::ItemRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

// ==========================================
// StockImportOutcome - 导入 API 返回值
// ==========================================
// 说明: items 是导入完成后从仓储重新读取的全量快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockImportOutcome {
    pub result: StockImportResult,
    pub items: Vec<InventoryItem>,
}

// ==========================================
// ImportApi - 对账导入 API
// ==========================================
pub struct ImportApi<R, C>
where
    R: ItemRepository,
    C: ImportConfigReader,
{
    importer: StockImporterImpl<R, C>,
    item_repo: Arc<R>,
}

impl<R, C> ImportApi<R, C>
where
    R: ItemRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    /// 创建新的 ImportApi 实例
    ///
    /// # 参数
    /// - item_repo: 库存物品仓储（导入器与快照回读共用）
    /// - config: 导入配置读取器
    pub fn new(item_repo: Arc<R>, config: C) -> Self {
        Self {
            importer: StockImporterImpl::new(Arc::clone(&item_repo), config),
            item_repo,
        }
    }

    /// 执行库存对账导入
    ///
    /// # 返回
    /// - Ok(StockImportOutcome): 导入结果 + 导入后重新读取的物品快照
    /// - Err(ApiError): 文件级错误（任何行处理前阻断）
    pub async fn import_stock<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ApiResult<StockImportOutcome> {
        let result = self.importer.import_from_file(file_path).await?;

        // 导入后全量回读，调用方以此快照为准
        let items = self.item_repo.list_items().await?;
        info!(
            batch_id = %result.batch_id,
            items = items.len(),
            "导入后物品快照回读完成"
        );

        Ok(StockImportOutcome { result, items })
    }

    /// 批量导入多个文件（并发执行），完成后统一回读快照
    pub async fn import_stock_batch<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> ApiResult<(Vec<Result<StockImportResult, String>>, Vec<InventoryItem>)> {
        let results = self.importer.batch_import(file_paths).await;
        let items = self.item_repo.list_items().await?;
        Ok((results, items))
    }
}

// ==========================================
// 仓储库存管理系统 - 库存对账导入器
// ==========================================
// 职责: 整合导入流程，从文件到仓储
// 流程: 解析 → 标准化 → 快照 → 对账 → 逐行更新 → 日志汇总
// 红线: 行级失败不阻断批次；无重试、无回滚、无事务
// ==========================================

use crate::config::ImportConfigReader;
use crate::domain::import::{
    ImportLogEntry, ImportSummary, NormalizedRow, RowStatus, StockImportResult,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::reconciler::{Reconciler, RowResolution};
use crate::importer::row_normalizer::RowNormalizer;
use crate::repository::ItemRepository;
use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// StockImporter Trait
// ==========================================
// 用途: 库存对账导入主接口
// 实现者: StockImporterImpl
#[async_trait]
pub trait StockImporter: Send + Sync {
    /// 从文件导入库存目标数量（.xlsx/.xls/.csv）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(StockImportResult): 行日志（保持遇到顺序）+ 汇总
    /// - Err(ImportError): 文件级错误（任何行处理前阻断整次导入）
    ///
    /// # 导入流程（5个阶段）
    /// 1. 文件读取与解析
    /// 2. 行标准化（列名别名优先级）
    /// 3. 库存快照读取
    /// 4. 对账（纯函数: 匹配 + delta 计算）
    /// 5. 逐行更新（严格串行，每行一次仓储调用）
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<StockImportResult>;

    /// 批量导入多个文件（并发执行）
    ///
    /// # 说明
    /// - 各文件导入相互独立，单文件失败不影响其他文件
    /// - 单文件内部仍是严格串行的逐行更新
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<StockImportResult, String>>;
}

// ==========================================
// StockImporterImpl - 库存对账导入器实现
// ==========================================
pub struct StockImporterImpl<R, C>
where
    R: ItemRepository,
    C: ImportConfigReader,
{
    // 数据访问层
    item_repo: Arc<R>,

    // 配置读取器
    config: C,

    // 文件解析器
    file_parser: UniversalFileParser,
}

impl<R, C> StockImporterImpl<R, C>
where
    R: ItemRepository,
    C: ImportConfigReader,
{
    /// 创建新的 StockImporter 实例
    ///
    /// # 参数
    /// - item_repo: 库存物品仓储
    /// - config: 导入配置读取器
    pub fn new(item_repo: Arc<R>, config: C) -> Self {
        Self {
            item_repo,
            config,
            file_parser: UniversalFileParser,
        }
    }

    /// 从配置构建行标准化器
    async fn build_normalizer(&self) -> ImportResult<RowNormalizer> {
        let quantity_columns = self.config.get_quantity_column_aliases().await?;
        let id_columns = self.config.get_id_column_aliases().await?;
        let name_columns = self.config.get_name_column_aliases().await?;
        Ok(RowNormalizer::new(quantity_columns, id_columns, name_columns))
    }

    /// 执行单个解析结果，产出终态日志条目
    ///
    /// 终态互斥: updated / failed / error（NotFound 在对账阶段已定）。
    /// 更新失败被吞掉并降级为日志数据，绝不越过行边界向上抛。
    async fn execute_resolution(&self, resolution: &RowResolution) -> ImportLogEntry {
        match resolution {
            RowResolution::NotFound {
                row_id,
                row_name,
                final_quantity,
            } => ImportLogEntry {
                item_id: row_id.clone().unwrap_or_default(),
                name: row_name.clone().unwrap_or_default(),
                initial: None,
                final_quantity: *final_quantity,
                delta: None,
                status: RowStatus::NotFound,
            },
            RowResolution::Matched {
                item_id,
                item_name,
                initial,
                final_quantity,
            } => {
                let status = match self
                    .item_repo
                    .update_quantity(item_id, *final_quantity)
                    .await
                {
                    Ok(Some(_)) => RowStatus::Updated,
                    Ok(None) => {
                        warn!(item_id = %item_id, "数量更新被拒绝（返回空）");
                        RowStatus::Failed
                    }
                    Err(e) => {
                        warn!(item_id = %item_id, error = %e, "数量更新失败");
                        RowStatus::Error
                    }
                };

                ImportLogEntry {
                    item_id: item_id.clone(),
                    name: item_name.clone(),
                    initial: Some(*initial),
                    final_quantity: *final_quantity,
                    delta: Some(final_quantity - initial),
                    status,
                }
            }
        }
    }
}

#[async_trait]
impl<R, C> StockImporter for StockImporterImpl<R, C>
where
    R: ItemRepository + Send + Sync,
    C: ImportConfigReader + Send + Sync,
{
    #[instrument(skip(self, file_path), fields(batch_id))]
    async fn import_from_file<P: AsRef<Path> + Send>(
        &self,
        file_path: P,
    ) -> ImportResult<StockImportResult> {
        use std::time::Instant;
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();

        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.to_string());
        info!(batch_id = %batch_id, file = %path.display(), "开始库存对账导入");

        // === 步骤 1: 解析文件（失败阻断整次导入）===
        debug!("步骤 1: 解析文件");
        let raw_rows = self.file_parser.parse(path)?;
        let total_rows = raw_rows.len();
        info!(total_rows = total_rows, "文件解析完成");

        // === 步骤 2: 行标准化 ===
        debug!("步骤 2: 行标准化");
        let normalizer = self.build_normalizer().await?;
        let normalized: Vec<NormalizedRow> =
            raw_rows.iter().map(|row| normalizer.normalize(row)).collect();

        // === 步骤 3: 库存快照 ===
        debug!("步骤 3: 读取库存快照");
        let snapshot = self
            .item_repo
            .list_items()
            .await
            .map_err(|e| ImportError::SnapshotError(e.to_string()))?;
        debug!(items = snapshot.len(), "库存快照读取完成");

        // === 步骤 4: 对账（纯函数）===
        debug!("步骤 4: 对账");
        let (resolutions, skipped) = Reconciler::resolve_rows(&snapshot, &normalized);
        info!(
            resolved = resolutions.len(),
            skipped = skipped,
            "对账完成"
        );

        // === 步骤 5: 逐行更新（严格串行）===
        debug!("步骤 5: 逐行更新");
        let mut log = Vec::with_capacity(resolutions.len());
        for resolution in &resolutions {
            log.push(self.execute_resolution(resolution).await);
        }

        let mut summary = ImportSummary {
            total_rows,
            skipped,
            ..Default::default()
        };
        for entry in &log {
            match entry.status {
                RowStatus::Updated => summary.updated += 1,
                RowStatus::NotFound => summary.not_found += 1,
                RowStatus::Failed => summary.failed += 1,
                RowStatus::Error => summary.errors += 1,
            }
        }

        let elapsed_time = start_time.elapsed();
        info!(
            batch_id = %batch_id,
            total = summary.total_rows,
            updated = summary.updated,
            not_found = summary.not_found,
            failed = summary.failed,
            errors = summary.errors,
            skipped = summary.skipped,
            elapsed_ms = elapsed_time.as_millis(),
            "库存对账导入完成"
        );

        Ok(StockImportResult {
            batch_id,
            file_name,
            log,
            summary,
            imported_at: Utc::now(),
            elapsed_time,
        })
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        file_paths: Vec<P>,
    ) -> Vec<Result<StockImportResult, String>> {
        use futures::future::join_all;

        info!(count = file_paths.len(), "开始批量导入文件");

        let import_tasks = file_paths.into_iter().map(|path| {
            let path_str = path.as_ref().display().to_string();
            async move {
                match self.import_from_file(path).await {
                    Ok(result) => {
                        info!(
                            file = %path_str,
                            updated = result.summary.updated,
                            "文件导入成功"
                        );
                        Ok(result)
                    }
                    Err(e) => {
                        warn!(file = %path_str, error = %e, "文件导入失败");
                        Err(format!("文件 {} 导入失败: {}", path_str, e))
                    }
                }
            }
        });

        let results = join_all(import_tasks).await;

        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "批量导入完成"
        );

        results
    }
}

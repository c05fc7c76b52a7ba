// ==========================================
// 仓储库存管理系统 - 领域层
// ==========================================
// 职责: 领域实体与类型定义，不含数据访问与业务编排
// ==========================================

pub mod import;
pub mod item;

// 重导出领域实体
pub use import::{
    ImportLogEntry, ImportRow, ImportSummary, NormalizedRow, QuantityUpdate, RawRow, RowStatus,
    StockImportResult,
};
pub use item::{InventoryItem, ItemStatus};

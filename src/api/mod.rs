// ==========================================
// 仓储库存管理系统 - API 层
// ==========================================
// 职责: 业务接口编排（参数验证 → 仓储/导入器调用 → 结果组装）
// ==========================================

pub mod error;
pub mod import_api;
pub mod item_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, StockImportOutcome};
pub use item_api::{ItemApi, NewItem};

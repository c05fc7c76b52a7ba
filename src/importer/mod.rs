// ==========================================
// 仓储库存管理系统 - 导入层
// ==========================================
// 职责: 库存对账导入管道
// 流程: 解析 → 标准化 → 匹配 → 对账 → 逐行更新 → 日志汇总
// ==========================================

pub mod error;
pub mod file_parser;
pub mod item_matcher;
pub mod reconciler;
pub mod row_normalizer;
pub mod stock_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
pub use item_matcher::ItemMatcher;
pub use reconciler::{Reconciler, RowResolution};
pub use row_normalizer::RowNormalizer;
pub use stock_importer::{StockImporter, StockImporterImpl};

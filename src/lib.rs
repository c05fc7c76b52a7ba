// ==========================================
// 仓储库存管理系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 库存主数据管理 + 库存对账导入
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 库存对账导入
pub mod importer;

// 导出层 - CSV 导出
pub mod export;

// 配置层 - 导入配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    ImportLogEntry, ImportRow, ImportSummary, InventoryItem, ItemStatus, NormalizedRow,
    QuantityUpdate, RowStatus, StockImportResult,
};

// 仓储
pub use repository::{ItemRepository, SqliteItemRepository};

// 导入器
pub use importer::{StockImporter, StockImporterImpl};

// API
pub use api::{ImportApi, ItemApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓储库存管理系统";

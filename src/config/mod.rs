// ==========================================
// 仓储库存管理系统 - 配置层
// ==========================================
// 职责: 导入流程的列名别名配置
// ==========================================

pub mod import_config;

// 重导出核心配置类型
pub use import_config::{ConfigError, ConfigResult, ImportConfigReader, StaticImportConfig};

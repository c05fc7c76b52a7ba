// ==========================================
// 仓储库存管理系统 - 数据仓储层
// ==========================================
// 职责: 数据访问，不含业务逻辑
// ==========================================

pub mod error;
pub mod item_repo;
pub mod item_repo_impl;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use item_repo::ItemRepository;
pub use item_repo_impl::SqliteItemRepository;

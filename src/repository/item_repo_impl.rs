// ==========================================
// 仓储库存管理系统 - 库存物品仓储 SQLite 实现
// ==========================================
// 职责: 管理 inventory_item 表的 CRUD 操作
// 红线: 不含业务逻辑，只负责数据访问；status 列随数量写入重新派生
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::item::{InventoryItem, ItemStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::item_repo::ItemRepository;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// SqliteItemRepository - SQLite 仓储实现
// ==========================================
pub struct SqliteItemRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteItemRepository {
    /// 创建新的仓储实例（自动建表）
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.init_schema()?;
        Ok(repo)
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.init_schema()?;
        Ok(repo)
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 初始化表结构
    fn init_schema(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS inventory_item (
                item_id      TEXT PRIMARY KEY,
                name         TEXT NOT NULL,
                quantity     INTEGER NOT NULL DEFAULT 0,
                min_quantity INTEGER NOT NULL DEFAULT 0,
                category     TEXT,
                status       TEXT NOT NULL,
                price        REAL,
                created_at   TEXT NOT NULL,
                updated_at   TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_inventory_item_status
                ON inventory_item(status);
            "#,
        )?;
        Ok(())
    }

    /// 行映射: inventory_item → InventoryItem
    fn map_row(row: &Row<'_>) -> rusqlite::Result<InventoryItem> {
        Ok(InventoryItem {
            item_id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
            min_quantity: row.get(3)?,
            category: row.get(4)?,
            status: ItemStatus::parse(&row.get::<_, String>(5)?),
            price: row.get(6)?,
            created_at: row
                .get::<_, String>(7)?
                .parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap_or_else(|_| Utc::now()),
            updated_at: row
                .get::<_, String>(8)?
                .parse::<chrono::DateTime<chrono::Utc>>()
                .unwrap_or_else(|_| Utc::now()),
        })
    }

    const SELECT_COLUMNS: &'static str = "item_id, name, quantity, min_quantity, category, \
                                          status, price, created_at, updated_at";
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn list_items(&self) -> RepositoryResult<Vec<InventoryItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM inventory_item ORDER BY item_id",
            Self::SELECT_COLUMNS
        ))?;

        let items = stmt
            .query_map([], Self::map_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    async fn find_by_id(&self, item_id: &str) -> RepositoryResult<Option<InventoryItem>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM inventory_item WHERE item_id = ?1",
            Self::SELECT_COLUMNS
        ))?;

        match stmt.query_row(params![item_id], Self::map_row) {
            Ok(item) => Ok(Some(item)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert_item(&self, mut item: InventoryItem) -> RepositoryResult<InventoryItem> {
        item.refresh_status();
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO inventory_item (
                item_id, name, quantity, min_quantity, category,
                status, price, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                item.item_id,
                item.name,
                item.quantity,
                item.min_quantity,
                item.category,
                item.status.as_str(),
                item.price,
                item.created_at.to_rfc3339(),
                item.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(item)
    }

    async fn update_item(&self, mut item: InventoryItem) -> RepositoryResult<Option<InventoryItem>> {
        item.refresh_status();
        item.updated_at = Utc::now();
        let conn = self.get_conn()?;
        let changed = conn.execute(
            r#"
            UPDATE inventory_item
            SET name = ?2, quantity = ?3, min_quantity = ?4, category = ?5,
                status = ?6, price = ?7, updated_at = ?8
            WHERE item_id = ?1
            "#,
            params![
                item.item_id,
                item.name,
                item.quantity,
                item.min_quantity,
                item.category,
                item.status.as_str(),
                item.price,
                item.updated_at.to_rfc3339(),
            ],
        )?;

        if changed == 0 {
            Ok(None)
        } else {
            Ok(Some(item))
        }
    }

    async fn update_quantity(
        &self,
        item_id: &str,
        quantity: i64,
    ) -> RepositoryResult<Option<InventoryItem>> {
        // 先取 min_quantity 再派生 status
        let existing = self.find_by_id(item_id).await?;
        let mut item = match existing {
            Some(item) => item,
            None => return Ok(None),
        };

        item.quantity = quantity;
        item.refresh_status();
        item.updated_at = Utc::now();

        let conn = self.get_conn()?;
        let changed = conn.execute(
            "UPDATE inventory_item SET quantity = ?2, status = ?3, updated_at = ?4 \
             WHERE item_id = ?1",
            params![
                item_id,
                item.quantity,
                item.status.as_str(),
                item.updated_at.to_rfc3339(),
            ],
        )?;

        if changed == 0 {
            Ok(None)
        } else {
            Ok(Some(item))
        }
    }

    async fn delete_item(&self, item_id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let changed = conn.execute(
            "DELETE FROM inventory_item WHERE item_id = ?1",
            params![item_id],
        )?;
        Ok(changed > 0)
    }
}

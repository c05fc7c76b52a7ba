// ==========================================
// 仓储库存管理系统 - 命令行入口
// ==========================================
// 用法:
//   warehouse-inventory import <file> [--db <path>]   库存对账导入
//   warehouse-inventory list [--db <path>]            列出全部物品
//   warehouse-inventory export <file> [--db <path>]   导出物品清单 CSV
// ==========================================

use std::process::ExitCode;
use std::sync::Arc;

use warehouse_inventory::api::{ImportApi, ItemApi};
use warehouse_inventory::config::StaticImportConfig;
use warehouse_inventory::db::get_default_db_path;
use warehouse_inventory::logging;
use warehouse_inventory::repository::SqliteItemRepository;

fn print_usage() {
    println!("{} v{}", warehouse_inventory::APP_NAME, warehouse_inventory::VERSION);
    println!();
    println!("用法:");
    println!("  warehouse-inventory import <file> [--db <path>]   库存对账导入 (.xlsx/.xls/.csv)");
    println!("  warehouse-inventory list [--db <path>]            列出全部物品");
    println!("  warehouse-inventory export <file> [--db <path>]   导出物品清单 CSV");
}

/// 解析 --db 参数，缺省使用平台数据目录
fn resolve_db_path(args: &[String]) -> String {
    if let Some(pos) = args.iter().position(|a| a == "--db") {
        if let Some(path) = args.get(pos + 1) {
            return path.clone();
        }
    }

    let default_path = get_default_db_path();
    if let Some(parent) = default_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    default_path.display().to_string()
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match args.first() {
        Some(c) => c.as_str(),
        None => {
            print_usage();
            return Ok(());
        }
    };

    let db_path = resolve_db_path(&args);
    tracing::info!(db = %db_path, "使用数据库");
    let repo = Arc::new(SqliteItemRepository::new(&db_path)?);

    match command {
        "import" => {
            let file = args
                .get(1)
                .filter(|a| !a.starts_with("--"))
                .ok_or("缺少导入文件路径")?;

            let api = ImportApi::new(Arc::clone(&repo), StaticImportConfig);
            let outcome = api.import_stock(file).await?;

            println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        }
        "list" => {
            let api = ItemApi::new(repo);
            let items = api.list_items().await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        "export" => {
            let file = args
                .get(1)
                .filter(|a| !a.starts_with("--"))
                .ok_or("缺少导出文件路径")?;

            let api = ItemApi::new(repo);
            let bytes = api.export_items_csv().await?;
            std::fs::write(file, &bytes)?;
            println!("已导出 {} 字节到 {}", bytes.len(), file);
        }
        _ => {
            print_usage();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志系统
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "执行失败");
            eprintln!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::path::Path;

use log::info;
use sqlx::{SqlitePool, sqlite::*};

pub mod crud;
pub mod model;

pub use model::*;

pub type Database = SqlitePool;

/// 打开数据库并确保 faces 表存在，可以在每次启动时重复调用
pub async fn init_db(filename: impl AsRef<Path>, wal: bool) -> Result<Database, crate::Error> {
    let filename = filename.as_ref();
    info!("初始化数据库连接: {}", filename.display());

    let journal_mode = if wal { SqliteJournalMode::Wal } else { SqliteJournalMode::Delete };
    let options = SqliteConnectOptions::new()
        .journal_mode(journal_mode)
        .synchronous(SqliteSynchronous::Normal)
        .filename(filename)
        .create_if_missing(true);

    let pool = SqlitePool::connect_with(options).await?;

    info!("检查数据库迁移");
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

use sqlx::{Executor, Result, Sqlite, SqlitePool};

use super::{EmbeddingRecord, FaceRecord, FaceSummary};

/// 添加人脸记录，返回新记录的 ID
///
/// ID 和创建时间在同一条语句中生成
pub async fn add_face<'c, E>(executor: E, name: &str, embedding: &[u8], image: &[u8]) -> Result<i64>
where
    E: Executor<'c, Database = Sqlite>,
{
    let (id,) = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO faces (name, embedding, image, created_at)
        VALUES (?, ?, ?, strftime('%Y-%m-%dT%H:%M:%f', 'now'))
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(embedding)
    .bind(image)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// 获取所有记录的特征向量，按 ID 排序
pub async fn get_embeddings(executor: &SqlitePool) -> Result<Vec<EmbeddingRecord>> {
    sqlx::query_as::<_, EmbeddingRecord>(
        r#"
        SELECT id, COALESCE(name, '') AS name, COALESCE(embedding, X'') AS embedding
        FROM faces ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// 获取记录摘要，用于检查数据库
pub async fn get_summaries(executor: &SqlitePool, limit: Option<u32>) -> Result<Vec<FaceSummary>> {
    // SQLite 中 LIMIT -1 表示不限制
    let limit = limit.map(i64::from).unwrap_or(-1);
    sqlx::query_as::<_, FaceSummary>(
        r#"
        SELECT
            id,
            COALESCE(name, '') AS name,
            COALESCE(created_at, '') AS created_at,
            COALESCE(embedding, X'') AS embedding,
            COALESCE(length(image), 0) AS image_size
        FROM faces ORDER BY id ASC LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(executor)
    .await
}

/// 根据 ID 获取完整记录
pub async fn get_face(executor: &SqlitePool, id: i64) -> Result<Option<FaceRecord>> {
    sqlx::query_as::<_, FaceRecord>(
        r#"
        SELECT
            id,
            COALESCE(name, '') AS name,
            COALESCE(embedding, X'') AS embedding,
            COALESCE(image, X'') AS image,
            COALESCE(created_at, '') AS created_at
        FROM faces WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// 查询记录数量
pub async fn count_faces(executor: &SqlitePool) -> Result<i64> {
    let (count,) = sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM faces")
        .fetch_one(executor)
        .await?;
    Ok(count)
}

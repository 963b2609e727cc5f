use log::info;
use tokio::task::spawn_blocking;

use crate::codec;
use crate::config::ConfDir;
use crate::db::{self, Database, EmbeddingRecord, FaceRecord, FaceSummary, crud};
use crate::error::{Error, Result};
use crate::matcher::{self, FaceMatch};

pub struct FaceDBBuilder {
    conf_dir: ConfDir,
    wal: bool,
}

impl FaceDBBuilder {
    pub fn new(conf_dir: ConfDir) -> Self {
        Self { conf_dir, wal: true }
    }

    /// 是否使用 WAL 模式，默认开启
    pub fn wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    pub async fn open(self) -> Result<FaceDB> {
        std::fs::create_dir_all(self.conf_dir.path()).map_err(sqlx::Error::Io)?;
        let db = db::init_db(self.conf_dir.database(), self.wal).await?;
        Ok(FaceDB { db })
    }
}

/// 人脸特征库，只追加，不支持修改和删除
#[derive(Clone)]
pub struct FaceDB {
    db: Database,
}

impl FaceDB {
    /// 编码特征向量并添加一条记录，返回记录 ID
    ///
    /// 含有 NaN、inf 或超出 f16 范围的分量时返回 [`Error::NonFinite`]
    pub async fn add_face(&self, name: &str, descriptor: &[f32], image: &[u8]) -> Result<i64> {
        if let Some(index) = codec::first_non_finite(descriptor) {
            return Err(Error::NonFinite { index });
        }
        let embedding = codec::encode(descriptor);
        self.add_face_raw(name, &embedding, image).await
    }

    /// 添加一条记录，`embedding` 必须是 [`codec::encode`] 的输出
    pub async fn add_face_raw(&self, name: &str, embedding: &[u8], image: &[u8]) -> Result<i64> {
        let id = crud::add_face(&self.db, name, embedding, image).await?;
        info!("添加人脸记录: {} ({})", id, name);
        Ok(id)
    }

    /// 获取所有记录的特征向量（不含图片）
    pub async fn embeddings(&self) -> Result<Vec<EmbeddingRecord>> {
        Ok(crud::get_embeddings(&self.db).await?)
    }

    /// 在所有记录中查找最佳匹配
    pub async fn find_best_match(&self, query: &[f32], threshold: f32) -> Result<Option<FaceMatch>> {
        let records = self.embeddings().await?;
        let query = query.to_vec();
        spawn_blocking(move || matcher::find_best_match(&query, records, threshold)).await?
    }

    pub async fn summaries(&self, limit: Option<u32>) -> Result<Vec<FaceSummary>> {
        Ok(crud::get_summaries(&self.db, limit).await?)
    }

    pub async fn face(&self, id: i64) -> Result<Option<FaceRecord>> {
        Ok(crud::get_face(&self.db, id).await?)
    }

    pub async fn count(&self) -> Result<i64> {
        Ok(crud::count_faces(&self.db).await?)
    }

    /// 关闭连接池，等待所有连接释放
    pub async fn close(&self) {
        self.db.close().await;
    }
}

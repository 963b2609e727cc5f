use std::sync::Arc;
use std::time::Instant;

use log::info;

use crate::encoder::FaceEncoder;
use crate::error::{Error, Result};
use crate::facedb::FaceDB;
use crate::matcher::FaceMatch;
use crate::metrics;

/// 人脸注册和验证
///
/// 特征提取和数据库都由调用方构造后注入
#[derive(Clone)]
pub struct FaceService {
    db: FaceDB,
    encoder: Arc<dyn FaceEncoder>,
    threshold: f32,
}

impl FaceService {
    pub fn new(db: FaceDB, encoder: Arc<dyn FaceEncoder>, threshold: f32) -> Self {
        Self { db, encoder, threshold }
    }

    pub fn db(&self) -> &FaceDB {
        &self.db
    }

    /// 提取图片中的人脸特征并注册，返回记录 ID
    pub async fn enroll(&self, name: &str, image: &[u8]) -> Result<i64> {
        let descriptor = self.encoder.encode(image).await?;
        let id = self.db.add_face(name, &descriptor, image).await?;
        metrics::inc_enroll_count();
        Ok(id)
    }

    /// 提取图片中的人脸特征，返回最佳匹配
    ///
    /// `threshold` 为空时使用默认阈值
    pub async fn verify(&self, image: &[u8], threshold: Option<f32>) -> Result<Option<FaceMatch>> {
        let threshold = threshold.unwrap_or(self.threshold);
        if !threshold.is_finite() {
            return Err(Error::InvalidThreshold(threshold));
        }
        let descriptor = self.encoder.encode(image).await?;

        let start = Instant::now();
        let result = self.db.find_best_match(&descriptor, threshold).await?;
        let elapsed = start.elapsed().as_secs_f32();

        match &result {
            Some(m) => info!("匹配成功: {} ({}), 相似度 {:.4}", m.id, m.name, m.score),
            None => info!("没有相似度不低于 {:.2} 的记录", threshold),
        }
        metrics::inc_verify(result.as_ref().map(|m| m.score), elapsed);

        Ok(result)
    }
}

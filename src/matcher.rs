use log::{debug, warn};
use serde::Serialize;
use utoipa::ToSchema;

use crate::codec;
use crate::db::EmbeddingRecord;
use crate::error::{Error, Result};
use crate::metrics;

/// 默认的匹配阈值（余弦相似度）
pub const DEFAULT_THRESHOLD: f32 = 0.4;

/// 最佳匹配结果
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FaceMatch {
    /// 记录 ID
    pub id: i64,
    /// 注册时的名字
    pub name: String,
    /// 余弦相似度，范围 [-1, 1]
    pub score: f32,
}

/// 计算余弦相似度，两个向量都会重新归一化
///
/// 任意一方范数为 0 时返回 0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// 线性扫描所有记录，返回相似度最高且不低于 `threshold` 的记录
///
/// - 相似度相同时保留扫描顺序中靠前的记录
/// - 无法解码的记录会被跳过
/// - 维度与查询向量不一致时直接返回 [`Error::DimensionMismatch`]
pub fn find_best_match<I>(query: &[f32], records: I, threshold: f32) -> Result<Option<FaceMatch>>
where
    I: IntoIterator<Item = EmbeddingRecord>,
{
    let mut best: Option<FaceMatch> = None;
    let mut scanned = 0usize;

    for record in records {
        let embedding = match codec::decode(&record.embedding) {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!("跳过无法解码的记录 {}: {}", record.id, e);
                metrics::inc_skipped_record();
                continue;
            }
        };
        if embedding.len() != query.len() {
            return Err(Error::DimensionMismatch { expected: embedding.len(), actual: query.len() });
        }
        if let Some(index) = codec::first_non_finite(&embedding) {
            warn!("跳过记录 {}: 第 {} 个分量不是有限值", record.id, index);
            metrics::inc_skipped_record();
            continue;
        }
        scanned += 1;

        let score = cosine_similarity(query, &embedding);
        if !score.is_finite() {
            warn!("跳过记录 {}: 相似度为 {}", record.id, score);
            metrics::inc_skipped_record();
            continue;
        }
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(FaceMatch { id: record.id, name: record.name, score });
        }
    }

    debug!("扫描了 {} 条记录，最佳匹配: {:?}", scanned, best);

    Ok(best.filter(|b| b.score >= threshold))
}

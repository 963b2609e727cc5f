//! 特征向量的存储编码
//!
//! 存储格式：f32 → f16（小端序，连续排列，无长度前缀），再经 zlib 压缩。
//! 维度由解压后的字节数隐式给出：`len / 2`。

use half::f16;
use miniz_oxide::deflate::compress_to_vec_zlib;
use miniz_oxide::inflate::decompress_to_vec_zlib_with_limit;

use crate::error::DecodeError;

/// zlib 压缩等级，兼顾速度和体积
const COMPRESSION_LEVEL: u8 = 6;

/// 解压后的最大字节数，远大于常见的 512 维（1024 字节）
const MAX_DECOMPRESSED_SIZE: usize = 64 * 1024;

/// 将特征向量编码为可存入 BLOB 列的字节
pub fn encode(descriptor: &[f32]) -> Vec<u8> {
    let raw = descriptor
        .iter()
        .flat_map(|&x| f16::from_f32(x).to_bits().to_le_bytes())
        .collect::<Vec<_>>();
    compress_to_vec_zlib(&raw, COMPRESSION_LEVEL)
}

/// 返回第一个无法用有限 f16 表示的分量下标
///
/// 绝对值超过 65504 的分量在 f16 中会变成 inf
pub fn first_non_finite(descriptor: &[f32]) -> Option<usize> {
    descriptor.iter().position(|&x| !f16::from_f32(x).is_finite())
}

/// 将 [`encode`] 的输出还原为 f32 特征向量
pub fn decode(bytes: &[u8]) -> Result<Vec<f32>, DecodeError> {
    let raw = decompress_to_vec_zlib_with_limit(bytes, MAX_DECOMPRESSED_SIZE)
        .map_err(|e| DecodeError::Decompress(format!("{:?}", e.status)))?;
    if raw.len() % 2 != 0 {
        return Err(DecodeError::OddLength(raw.len()));
    }
    Ok(raw
        .chunks_exact(2)
        .map(|b| f16::from_bits(u16::from_le_bytes([b[0], b[1]])).to_f32())
        .collect())
}

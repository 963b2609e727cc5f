#![allow(dead_code)]

use std::collections::HashMap;

use facematch::encoder::FaceEncoder;
use facematch::error::ExtractionError;
use futures::FutureExt;
use futures::future::BoxFuture;
use rand::prelude::*;

pub const DIM: usize = 512;

/// 第 i 维为 1 的单位向量
pub fn basis(i: usize) -> Vec<f32> {
    let mut v = vec![0.0; DIM];
    v[i] = 1.0;
    v
}

pub fn random_unit(rng: &mut impl Rng) -> Vec<f32> {
    let v = (0..DIM).map(|_| rng.random_range(-1.0f32..1.0)).collect::<Vec<_>>();
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    v.into_iter().map(|x| x / norm).collect()
}

pub fn negate(v: &[f32]) -> Vec<f32> {
    v.iter().map(|x| -x).collect()
}

/// 按图片内容返回预设的特征向量，未登记的图片视为没有人脸
#[derive(Default)]
pub struct FakeEncoder {
    faces: HashMap<Vec<u8>, Vec<f32>>,
}

impl FakeEncoder {
    pub fn with(mut self, image: &[u8], descriptor: Vec<f32>) -> Self {
        self.faces.insert(image.to_vec(), descriptor);
        self
    }
}

impl FaceEncoder for FakeEncoder {
    fn encode<'a>(&'a self, image: &'a [u8]) -> BoxFuture<'a, Result<Vec<f32>, ExtractionError>> {
        let result = self
            .faces
            .get(image)
            .cloned()
            .ok_or_else(|| ExtractionError::NoFace("no face in image".to_string()));
        futures::future::ready(result).boxed()
    }
}

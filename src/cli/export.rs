use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use crate::cli::SubCommandExtend;
use crate::codec;
use crate::{FaceDBBuilder, Opts};

#[derive(Parser, Debug, Clone)]
pub struct ExportCommand {
    /// 输出的 CSV 文件
    #[arg(short, long, default_value = "embeddings.csv")]
    pub output: PathBuf,
}

impl SubCommandExtend for ExportCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;

        let mut dim = None;
        let mut rows = String::new();
        for record in db.embeddings().await? {
            let v = match codec::decode(&record.embedding) {
                Ok(v) => v,
                Err(e) => {
                    warn!("跳过记录 {}: {}", record.id, e);
                    continue;
                }
            };
            if *dim.get_or_insert(v.len()) != v.len() {
                warn!("跳过记录 {}: 维度为 {}", record.id, v.len());
                continue;
            }
            let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
            write!(rows, "{},{},{:.8}", record.id, csv_field(&record.name), norm)?;
            for x in &v {
                write!(rows, ",{:.8}", x)?;
            }
            rows.push('\n');
        }

        let mut csv = String::from("id,name,embedding_norm");
        for i in 0..dim.unwrap_or(0) {
            write!(csv, ",dim_{}", i)?;
        }
        csv.push('\n');
        csv.push_str(&rows);

        tokio::fs::write(&self.output, csv).await?;
        info!("导出成功: {}", self.output.display());
        Ok(())
    }
}

/// 名字中包含逗号、引号或换行时需要加引号
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

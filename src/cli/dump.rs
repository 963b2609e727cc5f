use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;

use crate::cli::SubCommandExtend;
use crate::{FaceDBBuilder, Opts};

#[derive(Parser, Debug, Clone)]
pub struct DumpCommand {
    /// 记录 ID
    pub id: i64,
    /// 输出的图片文件
    #[arg(short, long, default_value = "face.jpg")]
    pub output: PathBuf,
}

impl SubCommandExtend for DumpCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
        let record = db.face(self.id).await?.ok_or_else(|| anyhow!("记录不存在: {}", self.id))?;
        if record.image.is_empty() {
            return Err(anyhow!("记录 {} 没有图片", self.id));
        }
        tokio::fs::write(&self.output, &record.image).await?;
        info!("已导出 {} ({}) 的图片到 {}", record.id, record.name, self.output.display());
        Ok(())
    }
}

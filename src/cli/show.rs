use anyhow::Result;
use clap::Parser;

use crate::FaceDBBuilder;
use crate::cli::SubCommandExtend;
use crate::codec;
use crate::config::Opts;

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    /// 最多显示的记录数量
    #[arg(short, long, value_name = "N")]
    pub limit: Option<u32>,
}

impl SubCommandExtend for ShowCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
        let total = db.count().await?;
        let records = db.summaries(self.limit).await?;

        println!("共 {} 条记录", total);
        println!("id\tname\tcreated_at\tembedding_bytes\timage_bytes\tdim\tnorm");
        for r in records {
            let stats = match codec::decode(&r.embedding) {
                Ok(v) => {
                    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
                    let mark = if (0.99..=1.01).contains(&norm) { "✓" } else { "✗" };
                    format!("{}\t{:.6} {}", v.len(), norm, mark)
                }
                Err(e) => format!("-\t{}", e),
            };
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.id,
                r.name,
                r.created_at,
                r.embedding.len(),
                r.image_size,
                stats
            );
        }
        Ok(())
    }
}

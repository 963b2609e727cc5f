use std::fs;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use facematch::FaceDBBuilder;
use facematch::config::ConfDir;
use predicates::prelude::*;

macro_rules! cargo_run {
    ($cmd:expr, $($args:expr),*) => {
        {
            let mut cmd = Command::cargo_bin($cmd)?;
            $(cmd.arg($args);)*
            cmd.assert()
        }
    };
}

async fn populate(conf_dir: &assert_fs::TempDir) -> Result<()> {
    let db = FaceDBBuilder::new(ConfDir::new(conf_dir.path())).open().await?;
    let mut alice = vec![0.0; 512];
    alice[0] = 1.0;
    db.add_face("alice", &alice, b"alice image").await?;
    db.add_face_raw("broken", b"garbage", b"").await?;
    db.close().await;
    Ok(())
}

#[test]
fn show_empty() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;

    cargo_run!("facematch", "-c", conf_dir.path(), "show")
        .success()
        .stdout(predicate::str::contains("共 0 条记录"));
    conf_dir.child("faces.db").assert(predicate::path::exists());

    Ok(())
}

#[tokio::test]
async fn show_records() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;
    populate(&conf_dir).await?;

    cargo_run!("facematch", "-c", conf_dir.path(), "show")
        .success()
        .stdout(predicate::str::contains("共 2 条记录"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("512\t1.000000 ✓"))
        .stdout(predicate::str::contains("特征向量解压失败"));

    cargo_run!("facematch", "-c", conf_dir.path(), "show", "--limit", "1")
        .success()
        .stdout(predicate::str::contains("broken").not());

    Ok(())
}

#[tokio::test]
async fn export_csv() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;
    populate(&conf_dir).await?;
    let output = conf_dir.child("out.csv");

    cargo_run!("facematch", "-c", conf_dir.path(), "export", "-o", output.path()).success();

    let csv = fs::read_to_string(output.path())?;
    let lines = csv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("id,name,embedding_norm,dim_0,dim_1"));
    assert!(lines[0].ends_with(",dim_511"));
    assert!(lines[1].starts_with("1,alice,1.00000000,1.00000000,0.00000000"));

    Ok(())
}

#[tokio::test]
async fn dump_image() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;
    populate(&conf_dir).await?;
    let output = conf_dir.child("face.jpg");

    cargo_run!("facematch", "-c", conf_dir.path(), "dump", "1", "-o", output.path()).success();
    output.assert("alice image");

    cargo_run!("facematch", "-c", conf_dir.path(), "dump", "42", "-o", output.path())
        .failure()
        .stderr(predicate::str::contains("记录不存在"));

    Ok(())
}

#[test]
fn verify_without_encoder() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;
    let image = conf_dir.child("face.jpg");
    image.write_binary(b"not really a jpeg")?;

    cargo_run!(
        "facematch",
        "-c",
        conf_dir.path(),
        "verify",
        "--encoder-url",
        "http://127.0.0.1:9/represent",
        image.path()
    )
    .failure()
    .stderr(predicate::str::contains("特征提取服务不可用"));

    Ok(())
}

#[test]
fn enroll_missing_image() -> Result<()> {
    let conf_dir = assert_fs::TempDir::new()?;

    cargo_run!("facematch", "-c", conf_dir.path(), "enroll", "alice", conf_dir.path().join("none.jpg"))
        .failure()
        .stderr(predicate::str::contains("无法读取图片"));

    Ok(())
}

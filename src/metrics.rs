use std::sync::LazyLock;

use prometheus::*;

static METRIC_ENROLL_COUNT: LazyLock<IntCounter> = LazyLock::new(|| {
    register_int_counter!("facematch_enroll_count", "count of enrolled faces").unwrap()
});

static METRIC_VERIFY_COUNT: LazyLock<IntCounterVec> = LazyLock::new(|| {
    register_int_counter_vec!("facematch_verify_count", "count of verifications", &["result"])
        .unwrap()
});

static METRIC_VERIFY_DURATION: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!("facematch_verify_duration", "duration of the full scan in seconds")
        .unwrap()
});

static METRIC_VERIFY_BEST_SCORE: LazyLock<Histogram> = LazyLock::new(|| {
    register_histogram!(
        "facematch_verify_best_score",
        "cosine similarity of the accepted match",
        (-10..=10).map(|x| x as f64 / 10.).collect()
    )
    .unwrap()
});

static METRIC_SKIPPED_RECORD_COUNT: LazyLock<IntCounter> = LazyLock::new(|| {
    register_int_counter!("facematch_skipped_record_count", "count of undecodable records")
        .unwrap()
});

pub fn inc_enroll_count() {
    METRIC_ENROLL_COUNT.inc();
}

/// 记录一次验证的结果和耗时
pub fn inc_verify(matched: Option<f32>, duration: f32) {
    let result = if matched.is_some() { "match" } else { "no_match" };
    METRIC_VERIFY_COUNT.with_label_values(&[result]).inc();
    METRIC_VERIFY_DURATION.observe(duration as f64);
    if let Some(score) = matched {
        METRIC_VERIFY_BEST_SCORE.observe(score as f64);
    }
}

pub fn inc_skipped_record() {
    METRIC_SKIPPED_RECORD_COUNT.inc();
}

use std::time::{Duration, Instant};

use super::*;

fn ball(n: usize) -> Vec<f32> {
  let c = (n as f32 - 1.0) / 2.0;
  let mut data = Vec::with_capacity(n * n * n);
  for i in 0..n {
    for j in 0..n {
      for k in 0..n {
        let (x, y, z) = (i as f32 - c, j as f32 - c, k as f32 - c);
        data.push((x * x + y * y + z * z).sqrt());
      }
    }
  }
  data
}

fn wait(extractor: &mut AsyncExtractor<f32>) -> ExtractResult<AsyncResult> {
  let deadline = Instant::now() + Duration::from_secs(30);
  loop {
    if let Some(result) = extractor.poll() {
      return result;
    }
    assert!(Instant::now() < deadline, "extraction did not finish");
    std::thread::sleep(Duration::from_millis(1));
  }
}

#[test]
fn test_request_then_poll() {
  let mut extractor = AsyncExtractor::new(ball(16), [16; 3], ExtractConfig::default()).unwrap();
  assert!(!extractor.is_busy());
  assert!(extractor.poll().is_none());

  assert!(extractor.request(5.0));
  assert!(extractor.is_busy());
  let result = wait(&mut extractor).unwrap();
  assert_eq!(result.iso, 5.0);
  assert!(result.stats.triangle_count > 0);
  assert!(!extractor.is_busy());
}

#[test]
fn test_same_isovalue_is_ignored() {
  let mut extractor = AsyncExtractor::new(ball(8), [8; 3], ExtractConfig::default()).unwrap();
  assert!(extractor.request(2.5));
  assert!(!extractor.request(2.5));
  wait(&mut extractor).unwrap();

  assert!(!extractor.request(2.5));
  assert!(!extractor.is_busy());

  extractor.cancel();
  assert!(extractor.request(2.5));
  wait(&mut extractor).unwrap();
}

#[test]
fn test_only_latest_request_is_delivered() {
  let mut extractor = AsyncExtractor::new(ball(24), [24; 3], ExtractConfig::default()).unwrap();
  for iso in [3.0, 4.0, 5.0, 6.0] {
    extractor.request(iso);
  }
  assert_eq!(extractor.last_iso(), Some(6.0));

  let result = wait(&mut extractor).unwrap();
  assert_eq!(result.iso, 6.0);
  assert!(extractor.poll().is_none());
}

#[test]
fn test_cancel_discards_pending_run() {
  let mut extractor = AsyncExtractor::new(ball(8), [8; 3], ExtractConfig::default()).unwrap();
  extractor.request(2.0);
  extractor.cancel();
  assert!(!extractor.is_busy());
  assert!(extractor.poll().is_none());
}

#[test]
fn test_invalid_lattice_rejected_up_front() {
  let result = AsyncExtractor::new(vec![0.0f32; 10], [2, 2, 2], ExtractConfig::default());
  assert!(result.is_err());
}

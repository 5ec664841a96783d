use super::*;

#[test]
fn can_detect_time_quota_reached() {
    let quota = TimeQuota::new(0.);

    std::thread::sleep(std::time::Duration::from_millis(5));

    assert!(quota.is_reached());
}

#[test]
fn can_detect_time_quota_not_reached() {
    let quota = TimeQuota::new(3600.);

    assert!(!quota.is_reached());
}

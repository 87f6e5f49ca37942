use hostprobe_mdstat::{classify, parse_report};
use hostprobe_types::Severity;

fn lines(report: &str) -> Vec<&str> {
    report.lines().collect()
}

const HEALTHY: &str = "\
Personalities : [raid1] [raid5]
md0 : active raid5 sda1[0] sdb1[1] sdc1[2]
      975179648 blocks level 5, 64k chunk, algorithm 2 [3/3] [UUU]

unused devices: <none>";

const DEGRADED_RAID5: &str = "\
Personalities : [raid1] [raid5]
md0 : active raid5 sda1[0] sdb1[1] sdc1[2](F)
      975179648 blocks level 5, 64k chunk, algorithm 2 [3/2] [UU_]

unused devices: <none>";

const FAILED_RAID5: &str = "\
Personalities : [raid1] [raid5]
md0 : active raid5 sda1[0] sdb1[1](F) sdc1[2](F)
      975179648 blocks level 5, 64k chunk, algorithm 2 [3/1] [U__]

unused devices: <none>";

const FAILED_MIRROR: &str = "\
Personalities : [raid1]
md1 : active raid1 sda2[0] sdb2[1](F)
      104320 blocks [2/1] [U_]

unused devices: <none>";

const INACTIVE: &str = "\
Personalities : [raid1]
md2 : inactive raid1 sda3[0] sdb3[1]
      104320 blocks [2/2] [UU]

unused devices: <none>";

const MIXED: &str = "\
Personalities : [raid1] [raid5]
md0 : active raid5 sda1[0] sdb1[1] sdc1[2](F)
      975179648 blocks level 5, 64k chunk, algorithm 2 [3/2] [UU_]

md1 : active raid1 sda2[0] sdb2[1](F)
      104320 blocks [2/1] [U_]

md2 : active raid1 sda3[0] sdb3[1]
      104320 blocks [2/2] [UU]

unused devices: <none>";

const BAD_RATIO: &str = "\
Personalities : [raid1]
md1 : active raid1 sda2[0] sdb2[1]
      resync=DELAYED

unused devices: <none>";

#[test]
fn test_healthy_raid5_is_ok_with_empty_message() {
    let result = classify(&lines(HEALTHY)).unwrap();
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "");
}

#[test]
fn test_short_report_means_no_raids() {
    let result = classify(&lines("Personalities :\nunused devices: <none>")).unwrap();
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "No s/w raids defined");
}

#[test]
fn test_degraded_raid5_warns() {
    let result = classify(&lines(DEGRADED_RAID5)).unwrap();
    assert_eq!(result.severity, Severity::Warning);
    assert_eq!(result.message, "md0 degraded (sdc1).");
}

#[test]
fn test_failed_raid5_is_critical() {
    let result = classify(&lines(FAILED_RAID5)).unwrap();
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.message, "md0 failed (sdb1, sdc1).");
}

#[test]
fn test_failed_mirror_is_critical() {
    let result = classify(&lines(FAILED_MIRROR)).unwrap();
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.message, "md1 failed (sdb2).");
}

#[test]
fn test_inactive_device_is_critical_regardless_of_counts() {
    let result = classify(&lines(INACTIVE)).unwrap();
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.message, "md2 is inactive.");
}

#[test]
fn test_aggregate_is_worst_device_in_report_order() {
    let result = classify(&lines(MIXED)).unwrap();
    assert_eq!(result.severity, Severity::Critical);
    assert_eq!(result.message, "md0 degraded (sdc1).; md1 failed (sdb2).");
}

#[test]
fn test_unreadable_ratio_skips_the_device() {
    // md1 never resynced, so its recovery line has no member counts;
    // the device vanishes from the run instead of alerting.
    let result = classify(&lines(BAD_RATIO)).unwrap();
    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "");
}

#[test]
fn test_group_count_mismatch_is_malformed() {
    let report = "\
Personalities : [raid1]
md1 : active raid1 sda2[0] sdb2[1]
      104320 blocks [2/2] [UU]
stray line

unused devices: <none>";
    let err = classify(&lines(report)).unwrap_err();
    assert!(err.to_string().contains("malformed mdstat report"));
}

#[test]
fn test_status_line_with_too_few_fields_is_malformed() {
    let report = "\
Personalities : [raid1]
md1 : active
      104320 blocks [2/2] [UU]

unused devices: <none>";
    assert!(classify(&lines(report)).is_err());
}

#[test]
fn test_classify_is_idempotent() {
    let input = lines(MIXED);
    let first = classify(&input).unwrap();
    let second = classify(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_report_exposes_member_counts() {
    let records = parse_report(&lines(DEGRADED_RAID5)).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "md0");
    assert_eq!(records[0].raid_type, "raid5");
    assert_eq!(records[0].active, 2);
    assert_eq!(records[0].expected, 3);
    assert_eq!(records[0].failed_drives(), vec!["sdc1"]);
}

#[test]
fn test_message_shape_stays_stable() {
    let result = classify(&lines(MIXED)).unwrap();
    insta::assert_snapshot!(
        result.message,
        @"md0 degraded (sdc1).; md1 failed (sdb2)."
    );
}

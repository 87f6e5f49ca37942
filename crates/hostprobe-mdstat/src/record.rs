/// One member drive as listed on an array's status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    /// Identifier up to the first `[` of the raw token (e.g. "sdb1")
    pub id: String,
    /// Whether the token carried the `(F)` failed marker
    pub failed: bool,
}

/// Parsed state of a single md device.
///
/// Records are transient: one classification run produces them from the
/// report lines and discards them with the result. `active <= expected`
/// holds for everything the kernel emits; the classifier treats any
/// device at or above its expected count as fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    /// Device name as printed, e.g. "md0"
    pub name: String,
    /// Raw status word from the status line ("active", "inactive", ...)
    pub status_word: String,
    /// Personality name from the status line, e.g. "raid5", "raid1"
    pub raid_type: String,
    /// Member drives in status-line order
    pub drives: Vec<Drive>,
    /// Currently active member count from the `[expected/active]` token
    pub active: u32,
    /// Member count of a complete array
    pub expected: u32,
}

impl DeviceRecord {
    /// Identifiers of drives carrying the failed marker, in status-line order
    pub fn failed_drives(&self) -> Vec<&str> {
        self.drives
            .iter()
            .filter(|drive| drive.failed)
            .map(|drive| drive.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_drives_preserve_order() {
        let record = DeviceRecord {
            name: "md0".to_string(),
            status_word: "active".to_string(),
            raid_type: "raid5".to_string(),
            drives: vec![
                Drive {
                    id: "sdc1".to_string(),
                    failed: true,
                },
                Drive {
                    id: "sdb1".to_string(),
                    failed: false,
                },
                Drive {
                    id: "sda1".to_string(),
                    failed: true,
                },
            ],
            active: 1,
            expected: 3,
        };

        assert_eq!(record.failed_drives(), vec!["sdc1", "sda1"]);
    }
}

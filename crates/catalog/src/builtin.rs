use crate::record::{AsteroidRecord, CloseApproach};

/// Records available without any feed files.
pub(crate) fn records() -> Vec<AsteroidRecord> {
    vec![
        AsteroidRecord::new("99942 Apophis", "2000042", true, "320.0", "400.0")
            .with_approach(CloseApproach::new("7.42", "31000.0")),
    ]
}

//! Projects `SG` elements into [`GroupRecord`]s.

use std::collections::BTreeMap;

use tracing::debug;

use crate::document::Element;
use crate::error::{Error, Result};
use crate::render::Row;

pub const GROUP_TAG: &str = "SG";
pub const NAME_PATH: &str = "SG_Info/name";
pub const STATUS_PATH: &str = "SG_Info/HostIOLimit_status";
pub const MAX_MB_SEC_PATH: &str = "SG_Info/HostIOLimit_max_mb_sec";
pub const MAX_IO_SEC_PATH: &str = "SG_Info/HostIOLimit_max_io_sec";

/// Host I/O Limit settings of one storage group.
///
/// Limits are kept as the text SYMCLI printed. A missing or empty element is
/// `None`, which is distinct from a limit of zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub name: String,
    pub limit_status: Option<String>,
    pub max_mb_sec: Option<String>,
    pub max_io_sec: Option<String>,
}

impl GroupRecord {
    /// Report row: name, status, IOPS, MB/sec.
    pub fn row(&self) -> Row<'_> {
        vec![
            Some(self.name.as_str()),
            self.limit_status.as_deref(),
            self.max_io_sec.as_deref(),
            self.max_mb_sec.as_deref(),
        ]
    }
}

/// Records keyed by storage group name.
pub type GroupMap = BTreeMap<String, GroupRecord>;

/// Builds a record for every `SG` child of `root`.
///
/// A repeated group name replaces the earlier record.
pub fn extract(root: &Element) -> Result<GroupMap> {
    let mut groups = GroupMap::new();

    for sg in root.children_named(GROUP_TAG) {
        let record = group_record(sg)?;
        if let Some(previous) = groups.insert(record.name.clone(), record) {
            debug!(name = %previous.name, "duplicate storage group, keeping the later entry");
        }
    }

    debug!(count = groups.len(), "extracted storage groups");
    Ok(groups)
}

fn group_record(sg: &Element) -> Result<GroupRecord> {
    let text = |path: &str| sg.find_text(path).map(str::to_string);

    let name = text(NAME_PATH).ok_or_else(|| Error::MissingRequiredField {
        field: NAME_PATH.to_string(),
    })?;

    Ok(GroupRecord {
        name,
        limit_status: text(STATUS_PATH),
        max_mb_sec: text(MAX_MB_SEC_PATH),
        max_io_sec: text(MAX_IO_SEC_PATH),
    })
}

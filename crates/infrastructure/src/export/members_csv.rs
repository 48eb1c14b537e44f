//! CSV export of channel members.

use std::path::Path;

use tracing::info;
use tukija_domain::Member;

use super::ExportError;

/// First line of every export.
pub const MEMBERS_CSV_HEADER: &str =
    "channel_id,display_name,highest_level,member_since,total_months";

/// Writes member lists as RFC 4180 CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembersCsvExporter;

impl MembersCsvExporter {
    /// Renders `members` with a header line. Lines end in CRLF.
    #[must_use]
    pub fn render(members: &[Member]) -> String {
        let mut out = String::with_capacity(64 * (members.len() + 1));
        out.push_str(MEMBERS_CSV_HEADER);
        out.push_str("\r\n");

        for member in members {
            let details = &member.snippet.member_details;
            let memberships = member.snippet.memberships_details.as_ref();
            let highest = memberships
                .and_then(|m| m.highest_accessible_level_display_name.as_deref())
                .unwrap_or_default();
            let duration = memberships.and_then(|m| m.memberships_duration.as_ref());
            let since = duration
                .and_then(|d| d.member_since.as_deref())
                .unwrap_or_default();
            let months = duration
                .and_then(|d| d.member_total_duration_months)
                .map(|m| m.to_string())
                .unwrap_or_default();

            let fields = [
                details.channel_id.as_str(),
                details.display_name.as_str(),
                highest,
                since,
                months.as_str(),
            ];
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                push_field(&mut out, field);
            }
            out.push_str("\r\n");
        }

        out
    }

    /// Writes `members` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// Returns `ExportError::Io` if the file cannot be written.
    pub async fn write(path: &Path, members: &[Member]) -> Result<(), ExportError> {
        tokio::fs::write(path, Self::render(members))
            .await
            .map_err(|source| ExportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), count = members.len(), "Members exported");
        Ok(())
    }
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

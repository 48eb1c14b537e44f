//! YouTube Data API resources used by Tukija.
//!
//! Only the fields the application reads are modelled; everything else in
//! the API responses is ignored.

use serde::{Deserialize, Serialize};

/// One page of a YouTube list response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    /// Resources on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Token for the next page, absent on the last page.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A channel resource (`part=id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier.
    pub id: String,
}

/// A membership level offered by a creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipLevel {
    /// Level identifier, usable as `hasAccessToLevel`.
    pub id: String,
    /// Level details.
    pub snippet: MembershipLevelSnippet,
}

/// Snippet of a membership level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipLevelSnippet {
    /// Channel offering the level.
    pub creator_channel_id: String,
    /// Display details.
    pub level_details: LevelDetails,
}

/// Display details of a membership level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDetails {
    /// Human readable level name.
    pub display_name: String,
}

/// A channel member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Member details.
    pub snippet: MemberSnippet,
}

/// Snippet of a member resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSnippet {
    /// Channel the membership belongs to.
    pub creator_channel_id: String,
    /// Who the member is.
    pub member_details: MemberDetails,
    /// What the member has access to.
    #[serde(default)]
    pub memberships_details: Option<MembershipsDetails>,
}

/// Identity of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetails {
    /// Member's channel id.
    pub channel_id: String,
    /// Member's channel URL.
    #[serde(default)]
    pub channel_url: Option<String>,
    /// Member's display name.
    pub display_name: String,
    /// Member's avatar URL.
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

/// Membership state of a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipsDetails {
    /// Highest level the member can access.
    #[serde(default)]
    pub highest_accessible_level: Option<String>,
    /// Display name of that level.
    #[serde(default)]
    pub highest_accessible_level_display_name: Option<String>,
    /// All levels the member can access.
    #[serde(default)]
    pub accessible_levels: Vec<String>,
    /// Membership duration.
    #[serde(default)]
    pub memberships_duration: Option<MembershipsDuration>,
}

/// How long someone has been a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipsDuration {
    /// RFC 3339 timestamp of the first membership.
    #[serde(default)]
    pub member_since: Option<String>,
    /// Total membership months, rounded down.
    #[serde(default)]
    pub member_total_duration_months: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_members_page() {
        let json = r#"{
            "kind": "youtube#memberListResponse",
            "nextPageToken": "NEXT",
            "pageInfo": {"totalResults": 1, "resultsPerPage": 1000},
            "items": [{
                "kind": "youtube#member",
                "etag": "x",
                "snippet": {
                    "creatorChannelId": "UC_creator",
                    "memberDetails": {
                        "channelId": "UC_member",
                        "channelUrl": "https://www.youtube.com/channel/UC_member",
                        "displayName": "Ada",
                        "profileImageUrl": "https://yt3.ggpht.com/ada"
                    },
                    "membershipsDetails": {
                        "highestAccessibleLevel": "level-1",
                        "highestAccessibleLevelDisplayName": "Gold",
                        "accessibleLevels": ["level-0", "level-1"],
                        "membershipsDuration": {
                            "memberSince": "2020-01-01T00:00:00Z",
                            "memberTotalDurationMonths": 12
                        }
                    }
                }
            }]
        }"#;

        let page: ListResponse<Member> = serde_json::from_str(json).expect("parse");
        assert_eq!(page.next_page_token.as_deref(), Some("NEXT"));
        let member = &page.items[0];
        assert_eq!(member.snippet.member_details.display_name, "Ada");
        let details = member.snippet.memberships_details.as_ref().expect("details");
        assert_eq!(details.accessible_levels.len(), 2);
        assert_eq!(
            details
                .memberships_duration
                .as_ref()
                .and_then(|d| d.member_total_duration_months),
            Some(12)
        );
    }

    #[test]
    fn test_empty_page_has_no_items() {
        let page: ListResponse<Channel> =
            serde_json::from_str(r#"{"kind": "youtube#channelListResponse"}"#).expect("parse");
        assert!(page.items.is_empty());
        assert!(page.next_page_token.is_none());
    }
}

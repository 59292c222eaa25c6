//! Campaign attribution carried from the landing page into each submission

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;
use url::Url;

/// Base of the synthetic tracking URL sent with every lead
pub const DEFAULT_TRACKING_BASE_URL: &str = "https://skylinescholar.com/";

const DEFAULT_UTM_SOURCE: &str = "direct";
const DEFAULT_UTM_MEDIUM: &str = "none";
const DEFAULT_UTM_CAMPAIGN: &str = "organic";

/// Characters left as-is in tracking URL values, the same set browsers keep
/// in `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// UTM parameters plus the derived tracking URL for one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingMetadata {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    /// Uniqueness token, milliseconds since the epoch at submit time
    pub utm_id: i64,
    pub tracking_url: String,
}

impl TrackingMetadata {
    /// Build tracking metadata from a landing query string.
    ///
    /// Missing or empty parameters fall back to `direct`, `none` and `organic`.
    pub fn from_query(query: &str, base_url: &str, now_millis: i64) -> Self {
        let mut source = None;
        let mut medium = None;
        let mut campaign = None;

        // First occurrence wins even when empty; the default applies afterwards
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            match &*key {
                "utm_source" if source.is_none() => source = Some(value.into_owned()),
                "utm_medium" if medium.is_none() => medium = Some(value.into_owned()),
                "utm_campaign" if campaign.is_none() => campaign = Some(value.into_owned()),
                _ => {}
            }
        }

        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let utm_source = or_default(source, DEFAULT_UTM_SOURCE);
        let utm_medium = or_default(medium, DEFAULT_UTM_MEDIUM);
        let utm_campaign = or_default(campaign, DEFAULT_UTM_CAMPAIGN);

        let query = format!(
            "utm_source={}&utm_medium={}&utm_campaign={}&utm_id={now_millis}",
            utf8_percent_encode(&utm_source, COMPONENT),
            utf8_percent_encode(&utm_medium, COMPONENT),
            utf8_percent_encode(&utm_campaign, COMPONENT),
        );
        let tracking_url = format!("{base_url}?{query}");

        Self {
            utm_source,
            utm_medium,
            utm_campaign,
            utm_id: now_millis,
            tracking_url,
        }
    }

    /// Correlation identifier sent as the `callback` parameter
    pub fn callback_id(&self) -> String {
        format!("callback_{}", self.utm_id)
    }
}

/// Extract the query string from a landing URL.
///
/// Accepts a full URL, a URL without a scheme, or a bare query string (with
/// or without a leading `?`).
pub fn landing_query(landing: &str) -> String {
    match Url::parse(landing) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => match landing.split_once('?') {
            Some((_, query)) => query.to_string(),
            None => landing.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_missing_parameters_use_defaults() {
        let meta = TrackingMetadata::from_query("", DEFAULT_TRACKING_BASE_URL, NOW);
        assert_eq!(meta.utm_source, "direct");
        assert_eq!(meta.utm_medium, "none");
        assert_eq!(meta.utm_campaign, "organic");
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let meta = TrackingMetadata::from_query(
            "utm_source=&utm_medium=&utm_campaign=",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(meta.utm_source, "direct");
        assert_eq!(meta.utm_medium, "none");
        assert_eq!(meta.utm_campaign, "organic");
    }

    #[test]
    fn test_present_parameters_are_kept() {
        let meta = TrackingMetadata::from_query(
            "?utm_source=google&utm_medium=cpc&utm_campaign=spring%20intake",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(meta.utm_source, "google");
        assert_eq!(meta.utm_medium, "cpc");
        assert_eq!(meta.utm_campaign, "spring intake");
    }

    #[test]
    fn test_partial_parameters_mix_with_defaults() {
        let meta =
            TrackingMetadata::from_query("utm_medium=email", DEFAULT_TRACKING_BASE_URL, NOW);
        assert_eq!(meta.utm_source, "direct");
        assert_eq!(meta.utm_medium, "email");
        assert_eq!(meta.utm_campaign, "organic");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let meta = TrackingMetadata::from_query(
            "utm_source=a&utm_source=b",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(meta.utm_source, "a");
    }

    #[test]
    fn test_tracking_url_layout() {
        let meta =
            TrackingMetadata::from_query("utm_source=fb", DEFAULT_TRACKING_BASE_URL, NOW);
        assert_eq!(
            meta.tracking_url,
            "https://skylinescholar.com/?utm_source=fb&utm_medium=none&utm_campaign=organic&utm_id=1700000000000"
        );
        assert_eq!(meta.utm_id, NOW);
    }

    #[test]
    fn test_tracking_url_encodes_values() {
        let meta = TrackingMetadata::from_query(
            "utm_campaign=a%26b",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert!(meta.tracking_url.contains("utm_campaign=a%26b"));
    }

    #[test]
    fn test_empty_first_occurrence_still_wins() {
        let meta = TrackingMetadata::from_query(
            "utm_source=&utm_source=x",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(meta.utm_source, "direct");
    }

    #[test]
    fn test_tracking_url_uses_component_encoding() {
        let meta = TrackingMetadata::from_query(
            "utm_campaign=spring%20intake&utm_source=it's",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(
            meta.tracking_url,
            "https://skylinescholar.com/?utm_source=it's&utm_medium=none&utm_campaign=spring%20intake&utm_id=1700000000000"
        );
    }

    #[test]
    fn test_tracking_url_keeps_unreserved_marks() {
        let meta = TrackingMetadata::from_query(
            "utm_campaign=(a)!~*-_.b%2Fc%3Dd",
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert!(meta
            .tracking_url
            .contains("utm_campaign=(a)!~*-_.b%2Fc%3Dd&"));
    }

    #[test]
    fn test_callback_id_uses_timestamp() {
        let meta = TrackingMetadata::from_query("", DEFAULT_TRACKING_BASE_URL, NOW);
        assert_eq!(meta.callback_id(), "callback_1700000000000");
    }

    #[test]
    fn test_landing_query_from_full_url() {
        assert_eq!(
            landing_query("https://skylinescholar.com/apply?utm_source=ig&x=1"),
            "utm_source=ig&x=1"
        );
        assert_eq!(landing_query("https://skylinescholar.com/"), "");
    }

    #[test]
    fn test_landing_query_from_bare_query() {
        assert_eq!(landing_query("?utm_source=ig"), "utm_source=ig");
        assert_eq!(landing_query("utm_source=ig"), "utm_source=ig");
    }

    #[test]
    fn test_landing_query_from_url_without_scheme() {
        assert_eq!(
            landing_query("skylinescholar.com/?utm_source=fb"),
            "utm_source=fb"
        );
        let meta = TrackingMetadata::from_query(
            &landing_query("skylinescholar.com/apply?utm_source=fb&utm_medium=social"),
            DEFAULT_TRACKING_BASE_URL,
            NOW,
        );
        assert_eq!(meta.utm_source, "fb");
        assert_eq!(meta.utm_medium, "social");
    }
}

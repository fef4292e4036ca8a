//! The legacy-violation allowlist shipped with the rule set.
//!
//! Policy data, not logic: API that predates a rule stays exempt from it so
//! re-running the rule set over an existing surface stays quiet. Entries are
//! exact qualified names or `*`-suffixed prefixes.

use api_surface_core::{Allowlist, Issue};

/// Exempt qualified names per issue, as shipped.
const ENTRIES: &[(Issue, &[&str])] = &[
    (
        Issue::UseParcelFileDescriptor,
        &[
            "android.os.ParcelFileDescriptor*",
            "android.system.Os*",
            "android.net.LocalSocket*",
            "java.io.*",
            "java.lang.ProcessBuilder.Redirect*",
        ],
    ),
    (
        Issue::AcronymName,
        &[
            "android.webkit.WebView.loadDataWithBaseURL",
            "android.net.Uri.toURI",
            "java.net.URL*",
        ],
    ),
    (
        Issue::EqualsAndHashCode,
        &["java.lang.Object", "android.util.Pair"],
    ),
    (
        Issue::NotCloseable,
        &["android.media.MediaPlayer", "android.os.Binder"],
    ),
    (
        Issue::VisiblySynchronized,
        &["java.io.*", "java.lang.StringBuffer*", "java.util.Vector*"],
    ),
    (
        Issue::GenericException,
        &["java.lang.Object.finalize", "java.lang.AutoCloseable.close"],
    ),
];

/// Builds the shipped allowlist.
#[must_use]
pub fn legacy_allowlist() -> Allowlist {
    let mut allowlist = Allowlist::new();
    for (issue, names) in ENTRIES {
        allowlist.allow(*issue, names.iter().copied());
    }
    allowlist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_entries_match_exact_and_prefix() {
        let allowlist = legacy_allowlist();
        assert!(allowlist.contains(
            Issue::UseParcelFileDescriptor,
            "android.system.Os.dup"
        ));
        assert!(allowlist.contains(
            Issue::AcronymName,
            "android.webkit.WebView.loadDataWithBaseURL"
        ));
        assert!(!allowlist.contains(Issue::AcronymName, "android.pkg.Text.getHTMLText"));
        assert!(!allowlist.contains(Issue::BadFuture, "android.system.Os.dup"));
    }
}

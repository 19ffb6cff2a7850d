use tracing::{info, warn};

use super::client::{Credentials, ListSource, Session};
use super::fetcher::CancellationToken;
use super::progress::{FetchMessage, FetchProgress};
use crate::error::{Result, WoordError};
use crate::list::WordList;

/// A list that could not be retrieved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub id: String,
    pub message: String,
}

/// Outcome of a retrieval run
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Retrieved lists, in search-id order
    pub lists: Vec<WordList>,
    /// Lists that failed, in search-id order
    pub failures: Vec<FetchFailure>,
    /// Set when the search itself failed and no ids were found
    pub search_error: Option<String>,
    /// Word records skipped because they did not hold exactly one pair
    pub skipped_records: usize,
}

impl FetchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.search_error.is_none() && self.skipped_records == 0
    }
}

/// Fetch every id in order, one request at a time.
///
/// Per-id failures are recorded in the report and do not stop the run.
pub fn fetch_all<S: ListSource + ?Sized>(
    source: &S,
    session: &Session,
    ids: &[String],
    cancel: &CancellationToken,
    report: &mut FetchReport,
    on_message: &mut dyn FnMut(FetchMessage),
) -> Result<()> {
    let mut progress = FetchProgress {
        total: ids.len(),
        ..Default::default()
    };

    for id in ids {
        if cancel.is_cancelled() {
            on_message(FetchMessage::Cancelled);
            return Err(WoordError::Cancelled);
        }

        progress.current = Some(id.clone());
        on_message(FetchMessage::Progress(progress.clone()));

        match source.fetch_list(session, id) {
            Ok(shaped) => {
                report.skipped_records += shaped.skipped_records;
                report.lists.push(shaped.list);
                progress.fetched += 1;
            }
            Err(e) => {
                warn!(id = %id, error = %e, timeout = e.is_timeout(), "failed to fetch list");
                on_message(FetchMessage::ListFailed {
                    id: id.clone(),
                    error: e.to_string(),
                });
                report.failures.push(FetchFailure {
                    id: id.clone(),
                    message: e.to_string(),
                });
                progress.failed += 1;
            }
        }
    }

    progress.current = None;
    on_message(FetchMessage::Progress(progress));
    Ok(())
}

/// Authenticate, search official lists for `term`, then fetch each list.
///
/// Authentication failure is returned as an error. A failed search yields a
/// report with no lists and `search_error` set.
pub fn retrieve<S: ListSource + ?Sized>(
    source: &S,
    credentials: &Credentials,
    term: &str,
    cancel: &CancellationToken,
    on_message: &mut dyn FnMut(FetchMessage),
) -> Result<FetchReport> {
    on_message(FetchMessage::Authenticating);
    let session = match source.authenticate(credentials) {
        Ok(session) => session,
        Err(e) => {
            let e = match e {
                WoordError::Auth(_) => e,
                other => WoordError::Auth(other.to_string()),
            };
            on_message(FetchMessage::Fatal(e.to_string()));
            return Err(e);
        }
    };
    info!(email = %credentials.email, "authenticated");

    let mut report = FetchReport::default();

    if cancel.is_cancelled() {
        on_message(FetchMessage::Cancelled);
        return Err(WoordError::Cancelled);
    }

    on_message(FetchMessage::Searching(term.to_string()));
    let ids = match source.search_official(&session, term) {
        Ok(ids) => ids,
        Err(e) => {
            warn!(term, error = %e, "search failed, continuing without lists");
            report.search_error = Some(e.to_string());
            Vec::new()
        }
    };
    info!(term, count = ids.len(), "found official lists");
    on_message(FetchMessage::Found(ids.len()));

    fetch_all(source, &session, &ids, cancel, &mut report, on_message)?;

    info!(
        fetched = report.lists.len(),
        failed = report.failures.len(),
        skipped_records = report.skipped_records,
        "retrieval finished"
    );
    on_message(FetchMessage::Completed);
    Ok(report)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::list::{Languages, WordPair, WordPairs};
    use crate::provider::envelope::ShapedList;

    /// In-memory list source
    #[derive(Default)]
    pub struct FakeSource {
        pub reject_login: bool,
        pub search_fails: bool,
        pub ids: Vec<String>,
        /// Ids whose detail request fails
        pub broken: Vec<String>,
        pub requests: RefCell<Vec<String>>,
    }

    impl FakeSource {
        pub fn with_ids(ids: &[&str]) -> Self {
            Self {
                ids: ids.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl ListSource for FakeSource {
        fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
            if self.reject_login {
                Err(WoordError::Auth(format!("rejected {}", credentials.email)))
            } else {
                Ok(Session::new("token"))
            }
        }

        fn search_official(&self, session: &Session, _term: &str) -> Result<Vec<String>> {
            assert_eq!(session.token(), "token");
            if self.search_fails {
                return Err(WoordError::Status {
                    status: 500,
                    url: "search".to_string(),
                });
            }
            let mut ids = self.ids.clone();
            ids.sort();
            Ok(ids)
        }

        fn fetch_list(&self, session: &Session, id: &str) -> Result<ShapedList> {
            assert_eq!(session.token(), "token");
            self.requests.borrow_mut().push(id.to_string());
            if self.broken.iter().any(|b| b == id) {
                return Err(WoordError::MissingLanguages {
                    id: id.to_string(),
                    found: 1,
                });
            }
            Ok(ShapedList {
                list: WordList::new(
                    id,
                    format!("List {id}"),
                    Languages::new("Dutch", "Russian"),
                    WordPairs::new(vec![WordPair::new("hond", "собака")]),
                ),
                skipped_records: 0,
            })
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "me@example.test".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_retrieve_sorted_and_ordered() {
        let source = FakeSource::with_ids(&["b", "a", "c"]);
        let mut messages = Vec::new();
        let report = retrieve(
            &source,
            &credentials(),
            "Russisch",
            &CancellationToken::new(),
            &mut |m| messages.push(m),
        )
        .unwrap();

        let ids: Vec<&str> = report.lists.iter().map(WordList::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(*source.requests.borrow(), vec!["a", "b", "c"]);
        assert!(report.is_complete());
        assert_eq!(messages.first(), Some(&FetchMessage::Authenticating));
        assert_eq!(messages.last(), Some(&FetchMessage::Completed));
        assert!(messages.contains(&FetchMessage::Found(3)));
    }

    #[test]
    fn test_auth_failure_is_fatal() {
        let source = FakeSource {
            reject_login: true,
            ..FakeSource::with_ids(&["a"])
        };
        let mut messages = Vec::new();
        let err = retrieve(
            &source,
            &credentials(),
            "Russisch",
            &CancellationToken::new(),
            &mut |m| messages.push(m),
        )
        .unwrap_err();

        assert!(err.is_fatal());
        assert!(source.requests.borrow().is_empty());
        assert!(matches!(messages.last(), Some(FetchMessage::Fatal(_))));
    }

    #[test]
    fn test_search_failure_is_partial() {
        let source = FakeSource {
            search_fails: true,
            ..FakeSource::with_ids(&["a"])
        };
        let report = retrieve(
            &source,
            &credentials(),
            "Russisch",
            &CancellationToken::new(),
            &mut |_| {},
        )
        .unwrap();

        assert!(report.lists.is_empty());
        assert!(report.search_error.is_some());
        assert!(!report.is_complete());
    }

    #[test]
    fn test_failed_list_recorded_and_skipped() {
        let source = FakeSource {
            broken: vec!["b".to_string()],
            ..FakeSource::with_ids(&["a", "b", "c"])
        };
        let mut messages = Vec::new();
        let report = retrieve(
            &source,
            &credentials(),
            "Russisch",
            &CancellationToken::new(),
            &mut |m| messages.push(m),
        )
        .unwrap();

        let ids: Vec<&str> = report.lists.iter().map(WordList::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "b");
        assert!(
            messages
                .iter()
                .any(|m| matches!(m, FetchMessage::ListFailed { id, .. } if id == "b"))
        );
    }

    #[test]
    fn test_duplicates_not_removed() {
        let source = FakeSource::with_ids(&["a", "a"]);
        let report = retrieve(
            &source,
            &credentials(),
            "Russisch",
            &CancellationToken::new(),
            &mut |_| {},
        )
        .unwrap();
        assert_eq!(report.lists.len(), 2);
    }

    #[test]
    fn test_cancel_stops_fetching() {
        let source = FakeSource::with_ids(&["a", "b"]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = retrieve(&source, &credentials(), "Russisch", &cancel, &mut |_| {}).unwrap_err();
        assert!(matches!(err, WoordError::Cancelled));
        assert!(source.requests.borrow().is_empty());
    }
}

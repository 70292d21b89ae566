//! Search flow
//!
//! Every query change bumps a sequence number. Only the response carrying the
//! latest number is applied; older ones are dropped when they arrive.

use tracing::debug;

use crate::client::api::ClientError;
use crate::client::notify::Notifications;
use crate::models::Dataset;

/// A search the caller should send to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Default)]
pub struct SearchFlow {
    initial: Dataset,
    displayed: Dataset,
    query: String,
    latest_seq: u64,
}

impl SearchFlow {
    pub fn new(initial: Dataset) -> Self {
        Self {
            displayed: initial.clone(),
            initial,
            query: String::new(),
            latest_seq: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn displayed(&self) -> &Dataset {
        &self.displayed
    }

    pub fn initial(&self) -> &Dataset {
        &self.initial
    }

    /// An empty query restores the initial dataset locally and supersedes any
    /// search still in flight.
    pub fn query_changed(&mut self, query: &str) -> Option<SearchTicket> {
        self.query = query.to_string();
        self.latest_seq += 1;

        if query.is_empty() {
            self.displayed = self.initial.clone();
            return None;
        }

        Some(SearchTicket {
            seq: self.latest_seq,
            query: self.query.clone(),
        })
    }

    /// Returns true when the response was applied.
    pub fn apply(
        &mut self,
        seq: u64,
        result: Result<Dataset, ClientError>,
        notifications: &mut Notifications,
    ) -> bool {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "Dropping stale search response");
            return false;
        }

        match result {
            Ok(data) => {
                self.displayed = data;
                true
            }
            Err(err) => {
                notifications.error(err.to_string());
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::notify::ToastKind;
    use crate::parser::parse_csv;
    use crate::search::filter_records;

    fn people() -> Dataset {
        parse_csv(b"name,age\nAna,30\nBob,25").unwrap()
    }

    #[test]
    fn test_starts_with_initial_dataset() {
        let flow = SearchFlow::new(people());
        assert_eq!(flow.displayed().len(), 2);
        assert_eq!(flow.query(), "");
    }

    #[test]
    fn test_apply_latest_response() {
        let mut flow = SearchFlow::new(people());
        let mut notes = Notifications::default();

        let ticket = flow.query_changed("an").unwrap();
        assert_eq!(ticket.query, "an");

        let result = filter_records(&people(), &ticket.query);
        assert!(flow.apply(ticket.seq, Ok(result), &mut notes));
        assert_eq!(flow.displayed().len(), 1);
        assert_eq!(flow.displayed()[0].get("name"), Some("Ana"));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut flow = SearchFlow::new(people());
        let mut notes = Notifications::default();

        let first = flow.query_changed("a").unwrap();
        let second = flow.query_changed("an").unwrap();
        assert!(second.seq > first.seq);

        assert!(flow.apply(second.seq, Ok(filter_records(&people(), "an")), &mut notes));
        // "a" matches both rows and arrives late
        assert!(!flow.apply(first.seq, Ok(people()), &mut notes));
        assert_eq!(flow.displayed().len(), 1);
    }

    #[test]
    fn test_clearing_query_reverts_and_supersedes() {
        let mut flow = SearchFlow::new(people());
        let mut notes = Notifications::default();

        let pending = flow.query_changed("9").unwrap();
        assert!(flow.query_changed("").is_none());
        assert_eq!(flow.displayed().len(), 2);

        assert!(!flow.apply(pending.seq, Ok(Dataset::new()), &mut notes));
        assert_eq!(flow.displayed().len(), 2);
    }

    #[test]
    fn test_failure_keeps_data_and_notifies() {
        let mut flow = SearchFlow::new(people());
        let mut notes = Notifications::default();

        let ticket = flow.query_changed("bo").unwrap();
        let err = ClientError::Network("connection refused".to_string());
        assert!(flow.apply(ticket.seq, Err(err), &mut notes));

        assert_eq!(flow.displayed().len(), 2);
        let toast = notes.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.message.contains("connection refused"));
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut flow = SearchFlow::new(people());
        let mut notes = Notifications::default();

        let first = flow.query_changed("b").unwrap();
        flow.query_changed("bo");
        let err = ClientError::Network("timeout".to_string());
        assert!(!flow.apply(first.seq, Err(err), &mut notes));
        assert!(notes.is_empty());
    }
}

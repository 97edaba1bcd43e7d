//! Merge engine
//!
//! Combines the local collection with a batch of remote quotes. A remote quote
//! is matched to a local one by id, falling back to exact (case-sensitive)
//! text equality. On a match the remote category wins; unmatched remote quotes
//! are appended in order.

use crate::types::Quote;

/// What happened to one remote quote during a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeEvent {
    /// No local counterpart; the quote was appended
    Added { text: String },
    /// A local counterpart existed; its category now follows the remote one
    ConflictResolved {
        text: String,
        local_category: String,
        remote_category: String,
    },
}

impl MergeEvent {
    pub fn describe(&self) -> String {
        match self {
            MergeEvent::Added { text } => format!("New quote synced: \"{}\"", text),
            MergeEvent::ConflictResolved {
                text,
                local_category,
                remote_category,
            } => format!(
                "Conflict resolved for \"{}\": kept server category '{}' over '{}'",
                text, remote_category, local_category
            ),
        }
    }
}

/// Result of a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub quotes: Vec<Quote>,
    pub events: Vec<MergeEvent>,
}

impl MergeOutcome {
    pub fn added(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::Added { .. }))
            .count()
    }

    pub fn conflicts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, MergeEvent::ConflictResolved { .. }))
            .count()
    }
}

/// Merge `remote` into a copy of `local`
pub fn merge(local: &[Quote], remote: &[Quote]) -> MergeOutcome {
    let mut quotes = local.to_vec();
    let mut events = Vec::with_capacity(remote.len());

    for incoming in remote {
        let position = quotes
            .iter()
            .position(|q| q.id == incoming.id)
            .or_else(|| quotes.iter().position(|q| q.text == incoming.text));

        match position {
            Some(index) => {
                let existing = &mut quotes[index];
                let local_category =
                    std::mem::replace(&mut existing.category, incoming.category.clone());
                events.push(MergeEvent::ConflictResolved {
                    text: existing.text.clone(),
                    local_category,
                    remote_category: incoming.category.clone(),
                });
            }
            None => {
                quotes.push(incoming.clone());
                events.push(MergeEvent::Added {
                    text: incoming.text.clone(),
                });
            }
        }
    }

    MergeOutcome { quotes, events }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(quotes: &[Quote]) -> Vec<(&str, &str)> {
        quotes
            .iter()
            .map(|q| (q.text.as_str(), q.category.as_str()))
            .collect()
    }

    #[test]
    fn test_empty_remote_is_identity() {
        let local = vec![Quote::new("A", "X"), Quote::new("B", "Y")];
        let outcome = merge(&local, &[]);
        assert_eq!(outcome.quotes, local);
        assert!(outcome.events.is_empty());
    }

    #[test]
    fn test_empty_local_yields_remote() {
        let remote = vec![Quote::new("A", "server"), Quote::new("B", "server")];
        let outcome = merge(&[], &remote);
        assert_eq!(outcome.quotes, remote);
        assert_eq!(outcome.added(), 2);
        assert_eq!(outcome.conflicts(), 0);
    }

    #[test]
    fn test_single_conflict_updates_only_match() {
        let local = vec![
            Quote::new("A", "X"),
            Quote::new("B", "Y"),
            Quote::new("C", "Z"),
        ];
        let remote = vec![Quote::new("B", "server")];
        let outcome = merge(&local, &remote);

        assert_eq!(outcome.quotes.len(), local.len());
        assert_eq!(
            pairs(&outcome.quotes),
            vec![("A", "X"), ("B", "server"), ("C", "Z")]
        );
        // Local identity survives the merge
        assert_eq!(outcome.quotes[1].id, local[1].id);
        assert_eq!(
            outcome.events,
            vec![MergeEvent::ConflictResolved {
                text: "B".to_string(),
                local_category: "Y".to_string(),
                remote_category: "server".to_string(),
            }]
        );
    }

    #[test]
    fn test_mixed_scenario() {
        let local = vec![Quote::new("A", "X")];
        let remote = vec![Quote::new("A", "Y"), Quote::new("B", "server")];
        let outcome = merge(&local, &remote);

        assert_eq!(pairs(&outcome.quotes), vec![("A", "Y"), ("B", "server")]);
        assert_eq!(outcome.conflicts(), 1);
        assert_eq!(outcome.added(), 1);
    }

    #[test]
    fn test_inputs_are_untouched() {
        let local = vec![Quote::new("A", "X")];
        let remote = vec![Quote::new("A", "Y")];
        let local_before = local.clone();
        let remote_before = remote.clone();

        let _ = merge(&local, &remote);

        assert_eq!(local, local_before);
        assert_eq!(remote, remote_before);
    }

    #[test]
    fn test_text_match_is_case_sensitive() {
        let local = vec![Quote::new("Dream it.", "Action")];
        let remote = vec![Quote::new("dream it.", "server")];
        let outcome = merge(&local, &remote);
        assert_eq!(outcome.quotes.len(), 2);
        assert_eq!(outcome.added(), 1);
    }

    #[test]
    fn test_first_text_match_wins() {
        let local = vec![Quote::new("A", "X"), Quote::new("A", "Y")];
        let outcome = merge(&local, &[Quote::new("A", "server")]);
        assert_eq!(pairs(&outcome.quotes), vec![("A", "server"), ("A", "Y")]);
    }

    #[test]
    fn test_id_match_takes_precedence_over_text() {
        let first = Quote::new("Same", "X");
        let second = Quote::new("Same", "Y");
        let mut edited = second.clone();
        edited.category = "server".to_string();

        let outcome = merge(&[first.clone(), second], &[edited]);
        assert_eq!(outcome.quotes[0], first);
        assert_eq!(outcome.quotes[1].category, "server");
    }

    #[test]
    fn test_duplicate_remote_text_collapses() {
        let remote = vec![Quote::new("A", "server"), Quote::new("A", "server")];
        let outcome = merge(&[], &remote);
        assert_eq!(outcome.quotes.len(), 1);
        assert_eq!(outcome.added(), 1);
        assert_eq!(outcome.conflicts(), 1);
    }

    #[test]
    fn test_event_descriptions() {
        let added = MergeEvent::Added {
            text: "A".to_string(),
        };
        assert!(added.describe().contains("New quote synced"));
    }
}

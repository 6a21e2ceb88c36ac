use pullseq_core::{DeferredPullSource, Never, PullSource, Step};

use crate::{DeferredRecordStore, RecordStore};

/// One element of a composite walk: the primary record plus whatever the
/// related table held at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite<V> {
    pub primary: V,
    pub related: Option<V>,
}

/// Walks a primary and a related table of one store in lockstep, positions
/// 1, 2, 3, ... A missing primary record ends the walk for good; a missing
/// related record only leaves the slot empty.
pub struct Joined<S> {
    store: S,
    primary: String,
    related: String,
    position: u64,
    done: bool,
}

impl<S> Joined<S> {
    pub fn new(store: S, primary: impl Into<String>, related: impl Into<String>) -> Self {
        Self {
            store,
            primary: primary.into(),
            related: related.into(),
            position: 0,
            done: false,
        }
    }
}

impl<S: RecordStore> PullSource for Joined<S> {
    type Item = Composite<S::Record>;
    type Error = Never;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::End;
        }

        self.position += 1;
        let Some(primary) = self.store.get(&self.primary, self.position) else {
            tracing::debug!(position = self.position, "primary record absent, walk complete");
            self.done = true;
            return Step::End;
        };
        let related = self.store.get(&self.related, self.position);

        Step::Value(Composite { primary, related })
    }
}

/// Deferred form of [`Joined`]. The two lookups share no data dependency,
/// so each advance issues them together and joins the results.
pub struct DeferredJoined<S> {
    store: S,
    primary: String,
    related: String,
    position: u64,
    done: bool,
}

impl<S> DeferredJoined<S> {
    pub fn new(store: S, primary: impl Into<String>, related: impl Into<String>) -> Self {
        Self {
            store,
            primary: primary.into(),
            related: related.into(),
            position: 0,
            done: false,
        }
    }
}

impl<S: DeferredRecordStore> DeferredPullSource for DeferredJoined<S> {
    type Item = Composite<S::Record>;
    type Error = Never;

    async fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::End;
        }

        self.position += 1;
        let (primary, related) = futures::join!(
            self.store.get(&self.primary, self.position),
            self.store.get(&self.related, self.position),
        );

        let Some(primary) = primary else {
            tracing::debug!(position = self.position, "primary record absent, walk complete");
            self.done = true;
            return Step::End;
        };

        Step::Value(Composite { primary, related })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Delayed, MemoryStore, YieldDelay};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Record {
        Customer { name: &'static str },
        Foods(Vec<&'static str>),
    }

    fn canned() -> MemoryStore<Record> {
        MemoryStore::new()
            .with("customer", 1, Record::Customer { name: "John" })
            .with("customer", 2, Record::Customer { name: "Mattias" })
            .with("customer", 3, Record::Customer { name: "Kim" })
            .with("food", 1, Record::Foods(vec!["cake", "waffle"]))
            .with("food", 2, Record::Foods(vec!["coffee"]))
            .with("food", 3, Record::Foods(vec!["apple", "carrot"]))
    }

    #[test]
    fn test_sync_walk_joins_both_tables() {
        let mut source = Joined::new(canned(), "customer", "food");

        assert_eq!(
            source.advance(),
            Step::Value(Composite {
                primary: Record::Customer { name: "John" },
                related: Some(Record::Foods(vec!["cake", "waffle"])),
            })
        );
        assert_eq!(
            source.advance(),
            Step::Value(Composite {
                primary: Record::Customer { name: "Mattias" },
                related: Some(Record::Foods(vec!["coffee"])),
            })
        );
        assert_eq!(
            source.advance(),
            Step::Value(Composite {
                primary: Record::Customer { name: "Kim" },
                related: Some(Record::Foods(vec!["apple", "carrot"])),
            })
        );
        assert_eq!(source.advance(), Step::End);
        assert_eq!(source.advance(), Step::End);
    }

    #[test]
    fn test_deferred_walk_preserves_order() {
        let store = Delayed::new(canned(), YieldDelay);
        let mut source = DeferredJoined::new(store, "customer", "food");

        let names = pollster::block_on(async {
            let mut names = Vec::new();
            while let Step::Value(composite) = source.advance().await {
                match composite.primary {
                    Record::Customer { name } => names.push(name),
                    Record::Foods(_) => panic!("primary table held a foods record"),
                }
            }
            names
        });

        assert_eq!(names, vec!["John", "Mattias", "Kim"]);
        assert!(pollster::block_on(source.advance()).is_end());
    }

    #[test]
    fn test_missing_related_record_is_not_termination() {
        let store = MemoryStore::new()
            .with("customer", 1, Record::Customer { name: "John" })
            .with("customer", 2, Record::Customer { name: "Mattias" })
            .with("food", 1, Record::Foods(vec!["cake"]));
        let mut source = Joined::new(store, "customer", "food");

        assert_eq!(
            source.advance(),
            Step::Value(Composite {
                primary: Record::Customer { name: "John" },
                related: Some(Record::Foods(vec!["cake"])),
            })
        );
        assert_eq!(
            source.advance(),
            Step::Value(Composite {
                primary: Record::Customer { name: "Mattias" },
                related: None,
            })
        );
        assert_eq!(source.advance(), Step::End);
    }

    #[test]
    fn test_hole_in_primary_table_ends_the_walk() {
        let store = MemoryStore::new()
            .with("customer", 1, Record::Customer { name: "John" })
            .with("customer", 3, Record::Customer { name: "Kim" });
        let mut source = Joined::new(store, "customer", "food");

        assert!(matches!(source.advance(), Step::Value(_)));
        assert_eq!(source.advance(), Step::End);
        // position 3 exists, but End is one-way
        assert_eq!(source.advance(), Step::End);
    }
}

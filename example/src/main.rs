use pullseq::random::{random_item, SelectError, StdRandomness, ThreadRandomness};
use pullseq::store::{Delayed, DeferredJoined, MemoryStore, YieldDelay};
use pullseq::{DeferredPullSource, PullSourceExt, RandomHaltSource, Step};

const DRAGON_SIZES: [&str; 3] = ["big", "medium", "tiny"];
const DRAGON_ABILITIES: [&str; 4] = ["time", "fire", "ice", "lightning"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Record {
    Customer { name: &'static str },
    Foods(Vec<&'static str>),
}

fn make_dragon(rng: &mut ThreadRandomness) -> Result<String, SelectError> {
    let size = random_item(rng, &DRAGON_SIZES)?;
    let ability = random_item(rng, &DRAGON_ABILITIES)?;
    Ok(format!("{size} {ability} dragon"))
}

fn canned_store() -> MemoryStore<Record> {
    MemoryStore::new()
        .with("customer", 1, Record::Customer { name: "John" })
        .with("customer", 2, Record::Customer { name: "Mattias" })
        .with("customer", 3, Record::Customer { name: "Kim" })
        .with("food", 1, Record::Foods(vec!["cake", "waffle"]))
        .with("food", 2, Record::Foods(vec!["coffee"]))
        .with("food", 3, Record::Foods(vec!["apple", "carrot"]))
}

fn main() -> Result<(), SelectError> {
    tracing_subscriber::fmt::init();

    // an army of unknown size: each pull may be the last
    let army = RandomHaltSource::new(StdRandomness::thread(), 0.75, make_dragon);
    for dragon in army.pulls() {
        println!("spawned {}", dragon?);
    }

    // the same walk against a store that answers after a suspension
    let store = Delayed::new(canned_store(), YieldDelay);
    let mut customers = DeferredJoined::new(store, "customer", "food");

    pollster::block_on(async {
        loop {
            match customers.advance().await {
                Step::Value(customer) => println!("{customer:?}"),
                Step::End => break,
                Step::Failed(e) => e.never(),
            }
        }
    });

    Ok(())
}

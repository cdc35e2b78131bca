//! Async example - dependent lookups with `and_then_async`
//!
//! Run with `cargo run --example async_lookup --features async`.

use std::collections::HashMap;
use std::time::Duration;

use accrue::Validated;

#[derive(Debug, Clone, PartialEq)]
enum LookupError {
    BadId(String),
    UnknownUser(u32),
    Suspended(String),
}

struct Directory {
    users: HashMap<u32, (String, bool)>,
}

impl Directory {
    async fn find(&self, id: u32) -> Validated<(String, bool), LookupError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        match self.users.get(&id) {
            Some(entry) => Validated::pure(entry.clone()),
            None => Validated::failed(LookupError::UnknownUser(id)),
        }
    }
}

async fn active_user(dir: &Directory, raw_id: &str) -> Validated<String, LookupError> {
    Validated::from_result(
        raw_id
            .parse::<u32>()
            .map_err(|_| LookupError::BadId(raw_id.to_string())),
    )
    .and_then_async(|id| dir.find(id))
    .await
    .and_then(|(name, suspended)| {
        if suspended {
            Validated::failed(LookupError::Suspended(name))
        } else {
            Validated::pure(name)
        }
    })
}

#[tokio::main]
async fn main() {
    let dir = Directory {
        users: HashMap::from([
            (1, ("ada".to_string(), false)),
            (2, ("mallory".to_string(), true)),
        ]),
    };

    println!("Async Lookup Example");
    println!("====================\n");

    for raw in ["1", "2", "3", "x"] {
        let outcome = active_user(&dir, raw).await;
        println!("{raw:>2} -> {:?}", outcome);
    }

    // independent lookups still accumulate
    let both = active_user(&dir, "2")
        .await
        .zip(active_user(&dir, "3").await);
    println!("\nboth -> {:?}", both);
}

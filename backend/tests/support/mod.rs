#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use spacex_dash::models::{Dataset, LaunchRecord, OutcomeClass};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// The three-launch table used throughout the tests:
/// A/500/success, A/9000/failure, B/3000/success.
pub fn example_dataset() -> Dataset {
    Dataset::from_records(vec![
        LaunchRecord::new("A", 500.0, OutcomeClass::Success, "v1.0"),
        LaunchRecord::new("A", 9000.0, OutcomeClass::Failure, "FT"),
        LaunchRecord::new("B", 3000.0, OutcomeClass::Success, "B4"),
    ])
    .expect("example dataset is non-empty")
}

/// A slice of the real launch table, in its original column layout.
pub const LAUNCH_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,0,0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,0,0,F9 v1.0  B0004,v1.0
3,CCAFS LC-40,0,525,F9 v1.0  B0005,v1.0
4,CCAFS LC-40,0,500,F9 v1.0  B0006,v1.0
5,CCAFS LC-40,0,677,F9 v1.0  B0007,v1.0
7,CCAFS LC-40,0,3170,F9 v1.1,v1.1
6,VAFB SLC-4E,0,500,F9 v1.1  B1003,v1.1
8,CCAFS LC-40,0,3325,F9 v1.1,v1.1
20,CCAFS LC-40,1,2034,F9 FT B1019,FT
22,KSC LC-39A,1,2490,F9 FT B1031.1,FT
24,KSC LC-39A,0,5300,F9 FT B1030,FT
27,KSC LC-39A,1,9600,F9 FT B1035.1,FT
29,VAFB SLC-4E,1,9600,F9 FT B1029.1,FT
36,CCAFS SLC-40,1,3669,F9 B4 B1039.2,B4
40,CCAFS SLC-40,1,4990,F9 B5 B1046.2,B5
";

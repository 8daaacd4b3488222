use serde::{Deserialize, Serialize};
use withable::{Record, Withable};

///
/// Status
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Status {
    Active,
    Inactive,
}

///
/// TestRecord
///
/// Six-field record covering text, integral, boolean, floating, and enum
/// components.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Record, Serialize, Withable)]
pub struct TestRecord {
    pub name: String,
    pub description: String,
    pub count: i64,
    pub active: bool,
    pub score: f64,
    pub status: Status,
}

/// Baseline instance most tests substitute against.
#[must_use]
pub fn test_record() -> TestRecord {
    TestRecord {
        name: "Test".to_string(),
        description: "RecordWither".to_string(),
        count: 3,
        active: true,
        score: 1.5,
        status: Status::Active,
    }
}

///
/// Account
///
/// Carries an accessor override on its first field.
///

#[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
pub struct Account {
    #[record(accessor = "OWNER_NAME")]
    pub owner: String,
    pub balance_cents: i64,
}

///
/// Labeled
///
/// Raw-identifier field; accessor and wither names drop the `r#`.
///

#[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
pub struct Labeled {
    pub r#type: String,
    pub value: i64,
}

///
/// Pair
///
/// Generic record; substitution stays typed per instantiation.
///

#[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
pub struct Pair<T> {
    pub left: T,
    pub right: T,
}

///
/// Empty
///

#[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
pub struct Empty {}

///
/// Telemetry
///
/// Property-test subject; every field type supports exact equality.
///

#[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
pub struct Telemetry {
    pub id: u64,
    pub label: String,
    pub count: i64,
    pub flag: bool,
}

pub mod nested {
    use withable::{Record, Withable};

    ///
    /// Inner
    ///

    #[derive(Clone, Debug, Eq, PartialEq, Record, Withable)]
    pub struct Inner {
        pub count: u32,
    }
}

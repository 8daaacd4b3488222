use withable::Record;

#[derive(Record)]
pub struct Point(i64, i64);

fn main() {}

use withable::Record;

#[derive(Record)]
pub struct Account {
    #[record(accessor = "ownerName")]
    pub owner: String,
}

fn main() {}

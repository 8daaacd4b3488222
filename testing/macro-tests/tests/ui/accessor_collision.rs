use withable::Record;

#[derive(Record)]
pub struct Duplicate {
    pub owner: String,
    #[record(accessor = "OWNER")]
    pub holder: String,
}

fn main() {}

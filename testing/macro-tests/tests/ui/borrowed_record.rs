use withable::Record;

#[derive(Record)]
pub struct Window<'a> {
    pub title: &'a str,
}

fn main() {}

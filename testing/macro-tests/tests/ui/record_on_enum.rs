use withable::Record;

#[derive(Record)]
pub enum Payment {
    Cash,
    Card { last4: u16 },
}

fn main() {}

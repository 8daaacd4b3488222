use withable::Withable;

#[derive(Withable)]
pub enum Payment {
    Cash,
}

fn main() {}

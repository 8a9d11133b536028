use booltable::{BoolTable, DegradePolicy, Value};

fn main() {
    tracing_subscriber::fmt().with_target(true).init();

    let user_age = 42;
    let flags = BoolTable::of([
        ("can vote", user_age >= 18),
        ("can rent a car", user_age >= 25),
        ("gets pension", user_age >= 67),
    ]);

    for label in ["can vote", "gets pension", "can fly"] {
        println!("{label}: {}", flags.q(label));
    }

    // Malformed input degrades instead of failing
    let open = BoolTable::of_value(Value::Int(1));
    let closed = BoolTable::of_value_with_policy(Value::Int(1), DegradePolicy::FailClosed);
    println!("{} -> {}", open.inspect(), open.q("anything"));
    println!("{} -> {}", closed.inspect(), closed.q("anything"));
}

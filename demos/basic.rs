use booltable::{Decision, Row, RunMode};

fn main() {
    let temperature = 31;

    // Replace an if/else ladder with a table
    let advice = Decision::of(vec![
        Row::value(temperature < 0, "stay in"),
        Row::value(temperature < 15, "bring a coat"),
        Row::value(temperature > 25, "bring water"),
        Row::value(temperature > 30, "find shade"),
    ]);

    println!("{}", advice.inspect());

    match advice.run(RunMode::First) {
        Some(first) => println!("First: {first:?}"),
        None => println!("Nothing applies."),
    }
    println!("Last: {:?}", advice.last());
    println!("All: {:?}", advice.any());
}

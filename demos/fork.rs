use booltable::{Decision, Row, Truth};

fn main() {
    let checks = Truth::of([true, true, false]);

    checks.fork_and(
        || println!("not every check passed"),
        || println!("every check passed"),
    );
    checks.fork_xor_r(|| println!("checks disagree"));

    // Function rows are only invoked when selected
    let price = 120_u32;
    let discount = Decision::of(vec![
        Row::call(price > 100, |p: u32| p / 10, price),
        Row::call(price > 50, |p: u32| p / 20, price),
        Row::call(true, |_: u32| 0, price),
    ]);
    println!("discount: {:?}", discount.first());
    println!("stacked: {:?}", discount.take(2));
}

use anyhow::{Context, Result};
use log::{debug, info};

use optional_int::{
    add_with,
    config::{DEFAULT_OPERANDS, DEFAULT_OVERFLOW_POLICY, OVERFLOW_POLICY_ENV},
    OptionalInt, OverflowPolicy,
};

fn parse_operand(arg: Option<String>, default: i32) -> Result<i32> {
    let Some(arg) = arg else {
        return Ok(default);
    };
    arg.parse()
        .with_context(|| format!("Invalid integer operand: {}", arg))
}

fn overflow_policy() -> Result<OverflowPolicy> {
    let Ok(name) = std::env::var(OVERFLOW_POLICY_ENV) else {
        return Ok(DEFAULT_OVERFLOW_POLICY);
    };
    name.parse()
        .with_context(|| format!("Invalid {} value", OVERFLOW_POLICY_ENV))
}

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let a = parse_operand(args.next(), DEFAULT_OPERANDS.0)?;
    let b = parse_operand(args.next(), DEFAULT_OPERANDS.1)?;
    let policy = overflow_policy()?;
    debug!("Using overflow policy: {}", policy);

    let sum = add_with(policy, a, b)?;
    println!("{} + {} = {}", a, b, sum);

    // Copy walkthrough.
    let original = OptionalInt::with_value(sum);
    let mut copy = original.clone();
    println!("copy: original={} copy={}", original, copy);
    copy.set(a);
    println!("after set: original={} copy={}", original, copy);

    // Swap walkthrough.
    let mut left = OptionalInt::with_value(a);
    let mut right = OptionalInt::from(b);
    left.swap(&mut right);
    println!("swap: left={} right={}", left, right);

    let mut empty = OptionalInt::new();
    empty.swap(&mut left);
    println!("swap with empty: left={} empty={}", left, empty);

    // Reading the emptied slot reports the failure instead of a value.
    match left.value() {
        Ok(value) => println!("read left: {}", value),
        Err(e) => println!("read left: {}", e),
    }

    info!("Done");
    Ok(())
}

//! Validates a small signup form from the command line.
//!
//! ```text
//! RUST_LOG=formcheck=trace cargo run --example signup -- ada ada@example.com +1-555-0100
//! ```

use formcheck::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FieldError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);

    let mut username = Field::new(
        "",
        [
            Operator::Required,
            Operator::MinLength(3),
            Operator::MaxLength(20),
            Operator::pattern("[a-z0-9_]+"),
        ],
    )?;
    let mut email = Field::new("", [Operator::Required, Operator::Email])?;
    let mut phone = Field::new("", [Operator::PhoneNumber])?;

    username.set_value(args.next().unwrap_or_default());
    email.set_value(args.next().unwrap_or_default());
    phone.set_value(args.next().unwrap_or_default());

    for (name, field) in [("username", &username), ("email", &email), ("phone", &phone)] {
        if field.is_valid() {
            println!("{name}: ok ({:?})", field.value());
        } else {
            let codes: Vec<_> = field.errors().iter().map(ValidationError::code).collect();
            println!("{name}: {}", codes.join(", "));
        }
    }

    let form = [username, email, phone];
    println!("form valid: {}", form.is_valid());

    Ok(())
}

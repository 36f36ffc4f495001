//! Validating a signup form with fieldcheck-validator.
//!
//! Run: `RUST_LOG=fieldcheck_validator=trace cargo run -p fieldcheck-validator --example signup_form`

use fieldcheck_validator::prelude::*;
use tracing_subscriber::EnvFilter;

struct Form<'a> {
    name: &'a str,
    email: &'a str,
    plan: &'a str,
    tags: &'a [&'a str],
}

fn validate(form: &Form<'_>) -> ValidationResult<()> {
    let mut v = Validator::new();

    v.check(!form.name.is_empty(), "name", "must be provided");
    v.check(!form.email.is_empty(), "email", "must be provided");
    v.check(matches(form.email, &EMAIL_RX), "email", "must be a valid email address");
    v.check(permitted_value(&form.plan, &["free", "pro", "team"]), "plan", "is not a known plan");
    v.check(unique(form.tags), "tags", "must not contain duplicate values");

    v.into_result()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let forms = [
        Form {
            name: "Grace",
            email: "grace@example.com",
            plan: "pro",
            tags: &["compilers", "cobol"],
        },
        Form {
            name: "",
            email: "grace@-example.com",
            plan: "enterprise",
            tags: &["cobol", "cobol"],
        },
    ];

    for form in &forms {
        match validate(form) {
            Ok(()) => println!("✓ '{}' accepted", form.email),
            Err(errors) => {
                println!("✗ '{}' rejected:", form.email);
                for (field, message) in &errors {
                    println!("    {field}: {message}");
                }
            }
        }
    }
}

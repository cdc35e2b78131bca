//! Form validation example - every problem with a signup form reported at once
//!
//! Run with `cargo run --example form_validation --features tracing` to also see
//! the accumulator's debug events.

use accrue::{ensure, Validated};

#[derive(Debug, Clone, PartialEq)]
enum FormError {
    EmailEmpty,
    EmailMissingAt { value: String },
    PasswordTooShort { min_length: usize },
    PasswordMismatch,
    AgeNotANumber { value: String },
    AgeTooYoung { age: u8, minimum: u8 },
}

#[derive(Debug)]
struct SignupForm {
    email: String,
    password: String,
    password_confirm: String,
    age: String,
}

#[derive(Debug)]
struct User {
    email: String,
    password: String,
    age: u8,
}

fn validate_email(raw: &str) -> Validated<String, FormError> {
    Validated::pure(raw.to_string()).accumulate((
        ensure(|e: &String| !e.is_empty(), |_| FormError::EmailEmpty),
        ensure(
            |e: &String| e.is_empty() || e.contains('@'),
            |e| FormError::EmailMissingAt { value: e.clone() },
        ),
    ))
}

fn validate_password(form: &SignupForm) -> Validated<String, FormError> {
    let confirm = form.password_confirm.clone();
    Validated::pure(form.password.clone()).accumulate((
        ensure(
            |p: &String| p.len() >= 8,
            |_| FormError::PasswordTooShort { min_length: 8 },
        ),
        ensure(move |p: &String| *p == confirm, |_| FormError::PasswordMismatch),
    ))
}

fn validate_age(raw: &str) -> Validated<u8, FormError> {
    // the range check needs a number first
    Validated::catching(|| {
        raw.parse::<u8>().map_err(|_| FormError::AgeNotANumber {
            value: raw.to_string(),
        })
    })
    .and_then(|age| {
        Validated::pure(age).accumulate((ensure(
            |a: &u8| *a >= 18,
            |a| FormError::AgeTooYoung {
                age: *a,
                minimum: 18,
            },
        ),))
    })
}

fn validate_form(form: &SignupForm) -> Validated<User, FormError> {
    Validated::zip_all((
        validate_email(&form.email),
        validate_password(form),
        validate_age(&form.age),
    ))
    .map(|(email, password, age)| User {
        email,
        password,
        age,
    })
}

fn report(form: &SignupForm) {
    match validate_form(form) {
        Validated::Valid(user) => println!("  ok: {} ({})", user.email, user.age),
        Validated::Invalid(failures) => {
            println!("  {} problem(s):", failures.len());
            for failure in failures {
                println!("    - {:?}", failure);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .init();

    println!("Form Validation Example");
    println!("=======================\n");

    println!("Valid form:");
    report(&SignupForm {
        email: "ada@example.com".to_string(),
        password: "analytical".to_string(),
        password_confirm: "analytical".to_string(),
        age: "36".to_string(),
    });

    println!("\nEverything wrong:");
    report(&SignupForm {
        email: "ada.example.com".to_string(),
        password: "short".to_string(),
        password_confirm: "shorter".to_string(),
        age: "17".to_string(),
    });

    println!("\nAge is not a number (range check never runs):");
    report(&SignupForm {
        email: "".to_string(),
        password: "analytical".to_string(),
        password_confirm: "analytical".to_string(),
        age: "old".to_string(),
    });
}

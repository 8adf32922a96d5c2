//! `demo` command: the sample invocations shipped with the project.

use std::io::Write;

use anyhow::Result;

use formguard_core::{validate_allowlist, validate_form, validate_pattern, UserForm};

use crate::ui::output::{print_form_outcome, print_result};

pub fn sample_form() -> UserForm {
    UserForm::new(
        "john_doe",
        "john@example.com",
        "USER",
        "1990-01-01",
        "<script>alert('xss')</script>Some notes",
    )
}

pub fn run_demo<W: Write>(writer: &mut W, color: bool) -> Result<bool> {
    let email = validate_pattern("test@example.com", "email")?;
    print_result(writer, "Email validation", &email, color)?;

    let role = validate_allowlist("ADMIN", "userRole")?;
    print_result(writer, "Role validation", &role, color)?;

    let outcome = validate_form(&sample_form());
    print_form_outcome(writer, &outcome, color)?;

    Ok(email.valid && role.valid && outcome.valid)
}

//! Enquiry form command.

use anyhow::Result;
use dialoguer::Input;
use mattress_commerce::contact::ContactForm;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
///
/// Fields not given as flags are prompted for, unless output is JSON.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !ctx.output.is_json();
    let mut form = ContactForm::new(
        field(args.name, "Your Name", interactive)?,
        field(args.phone, "Phone Number", interactive)?,
        field(args.email, "Email Address", interactive)?,
        field(args.message, "Your Message", interactive)?,
    );

    let ack = form.submit();

    if ctx.output.is_json() {
        ctx.output.json(&ack);
        return Ok(());
    }

    ctx.output.success(&ack.title);
    ctx.output.line(&ack.description);
    Ok(())
}

fn field(value: Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

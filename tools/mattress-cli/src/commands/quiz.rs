//! Interactive mattress finder quiz.

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Select};
use mattress_commerce::finder::{QuestionId, QuizProgress, QuizSession};

use super::recommend::print_recommendation;
use super::QuizArgs;
use crate::context::Context;

const BACK: &str = "← Back";

/// Run the quiz command.
pub fn run(args: QuizArgs, ctx: &Context) -> Result<()> {
    let mut session = QuizSession::new();

    loop {
        let question = session.current_question();
        let options = question.options();

        eprintln!(
            "\n{} {}",
            style(format!("[{}/{}]", question.number(), QuestionId::ALL.len())).dim(),
            style(question.label()).cyan().bold()
        );
        eprintln!("{}", style(format!("{}% complete", session.progress_percent())).dim());

        let mut items: Vec<&str> = options.clone();
        if session.step() > 0 {
            items.push(BACK);
        }

        let default = session
            .selected_option()
            .and_then(|selected| options.iter().position(|o| *o == selected))
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt(question.prompt())
            .items(&items)
            .default(default)
            .interact()?;

        if items[selection] == BACK {
            session.back();
            continue;
        }

        match session.answer(items[selection])? {
            QuizProgress::Next(_) => continue,
            QuizProgress::Finished(rec) => {
                print_recommendation(&rec, ctx)?;

                if args.once || ctx.output.is_json() {
                    return Ok(());
                }

                let again = Confirm::new()
                    .with_prompt("Retake the quiz?")
                    .default(false)
                    .interact()?;
                if !again {
                    return Ok(());
                }
                session.retake();
            }
        }
    }
}
